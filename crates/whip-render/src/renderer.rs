use crate::helpers::{create_vertex_buffer, make_instanced_pipeline, InstanceBuffer};
use glam::{Mat4, Vec2, Vec3, Vec4};
use whip_core::constants::{BODY_CHEVRON_DEPTH, TIP_CHEVRON_DEPTH, WHIP_COLOR, WHIP_RIM_COLOR};
use whip_core::{chevron_outline, ParticleInstance, SegmentInstance, SegmentRole, WhipEngine};

pub static WHIP_WGSL: &str = include_str!("../shaders/whip.wgsl");

const SEGMENT_ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    1 => Float32x3,
    2 => Float32,
    3 => Float32x2,
    4 => Float32,
    5 => Float32
];
const PARTICLE_ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
    1 => Float32x3,
    2 => Float32,
    3 => Float32x4
];
const MESH_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 6 => Float32x3];
const CORNER_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

// front + back caps (2 triangles each) and 4 side walls (2 triangles each)
pub const CHEVRON_VERTS: u32 = 36;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ChevronVertex {
    /// xy in unit chevron space (scaled by instance size), z in world units.
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Uniforms {
    view: Mat4,
    proj: Mat4,
    group: Mat4,
    // rgb + time in seconds
    base_color: Vec4,
    rim_color: Vec4,
}

fn vertex(p: Vec2, z: f32, normal: Vec3) -> ChevronVertex {
    ChevronVertex {
        position: p.extend(z).to_array(),
        normal: normal.to_array(),
    }
}

/// Extruded chevron: caps facing ±Z plus side walls with outward normals,
/// so the rim term lights the edges rather than the whole face.
pub fn chevron_mesh(role: SegmentRole) -> Vec<ChevronVertex> {
    let outline = chevron_outline(role);
    let [nose, upper, notch, lower] = outline;
    let half = match role {
        SegmentRole::Body => BODY_CHEVRON_DEPTH,
        SegmentRole::Tip => TIP_CHEVRON_DEPTH,
    } * 0.5;

    let mut out = Vec::with_capacity(CHEVRON_VERTS as usize);
    for (z, normal) in [(half, Vec3::Z), (-half, Vec3::NEG_Z)] {
        for p in [nose, upper, notch, nose, notch, lower] {
            out.push(vertex(p, z, normal));
        }
    }
    // outline is counter-clockwise, so the outward normal is on the right
    for i in 0..outline.len() {
        let a = outline[i];
        let b = outline[(i + 1) % outline.len()];
        let d = b - a;
        let normal = Vec3::new(d.y, -d.x, 0.0).normalize();
        let quad = [(a, half), (b, half), (b, -half), (a, half), (b, -half), (a, -half)];
        for (p, z) in quad {
            out.push(vertex(p, z, normal));
        }
    }
    out
}

const BILLBOARD: [f32; 12] = [
    -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, //
    -1.0, -1.0, 1.0, 1.0, -1.0, 1.0,
];

pub struct WhipRenderer {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    segment_pipeline: wgpu::RenderPipeline,
    particle_pipeline: wgpu::RenderPipeline,
    chevron_vb: wgpu::Buffer,
    billboard_vb: wgpu::Buffer,
    segment_instances: InstanceBuffer,
    particle_instances: InstanceBuffer,
    segment_scratch: Vec<SegmentInstance>,
    particle_scratch: Vec<ParticleInstance>,
    segment_count: u32,
    particle_count: u32,
}

impl WhipRenderer {
    pub fn new(device: &wgpu::Device, color_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("whip_shader"),
            source: wgpu::ShaderSource::Wgsl(WHIP_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("whip_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("whip_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("whip_uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("whip_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let mesh_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ChevronVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &MESH_ATTRS,
        };
        let corner_layout = wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 2) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &CORNER_ATTRS,
        };
        let segment_pipeline = make_instanced_pipeline(
            device,
            &pl,
            &shader,
            "segment_pipeline",
            ("vs_segment", "fs_segment"),
            &[
                mesh_layout,
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<SegmentInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &SEGMENT_ATTRS,
                },
            ],
            color_format,
            wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING,
        );
        let additive = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent::OVER,
        };
        let particle_pipeline = make_instanced_pipeline(
            device,
            &pl,
            &shader,
            "particle_pipeline",
            ("vs_particle", "fs_particle"),
            &[
                corner_layout,
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<ParticleInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &PARTICLE_ATTRS,
                },
            ],
            color_format,
            additive,
        );

        let mut chevrons = chevron_mesh(SegmentRole::Body);
        chevrons.extend(chevron_mesh(SegmentRole::Tip));
        let chevron_vb =
            create_vertex_buffer(device, "chevron_vb", bytemuck::cast_slice(&chevrons));
        let billboard_vb =
            create_vertex_buffer(device, "billboard_vb", bytemuck::cast_slice(&BILLBOARD));

        Self {
            uniform_buffer,
            bind_group,
            segment_pipeline,
            particle_pipeline,
            chevron_vb,
            billboard_vb,
            segment_instances: InstanceBuffer::new(
                device,
                "segment_instances",
                std::mem::size_of::<SegmentInstance>(),
                32,
            ),
            particle_instances: InstanceBuffer::new(
                device,
                "particle_instances",
                std::mem::size_of::<ParticleInstance>(),
                512,
            ),
            segment_scratch: Vec::new(),
            particle_scratch: Vec::new(),
            segment_count: 0,
            particle_count: 0,
        }
    }

    /// Upload the engine's current frame.
    pub fn prepare(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, engine: &WhipEngine) {
        let camera = engine.camera();
        let frame = engine.frame();
        let uniforms = Uniforms {
            view: camera.view_matrix(),
            proj: camera.projection_matrix(),
            group: frame.group,
            base_color: Vec3::from(WHIP_COLOR).extend(frame.time),
            rim_color: Vec3::from(WHIP_RIM_COLOR).extend(1.0),
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        engine.pack_segments(&mut self.segment_scratch);
        self.segment_instances
            .write(device, queue, bytemuck::cast_slice(&self.segment_scratch));
        self.segment_count = self.segment_scratch.len() as u32;

        engine.pack_particles(&mut self.particle_scratch);
        self.particle_instances
            .write(device, queue, bytemuck::cast_slice(&self.particle_scratch));
        self.particle_count = self.particle_scratch.len() as u32;
    }

    /// Record draws into an already-begun pass. Segments are packed body
    /// first with the tip last, so the tip uses the second chevron.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_bind_group(0, &self.bind_group, &[]);
        if self.segment_count > 0 {
            let body = self.segment_count - 1;
            pass.set_pipeline(&self.segment_pipeline);
            pass.set_vertex_buffer(0, self.chevron_vb.slice(..));
            pass.set_vertex_buffer(1, self.segment_instances.slice(self.segment_count));
            pass.draw(0..CHEVRON_VERTS, 0..body);
            pass.draw(CHEVRON_VERTS..CHEVRON_VERTS * 2, body..self.segment_count);
        }
        if self.particle_count > 0 {
            pass.set_pipeline(&self.particle_pipeline);
            pass.set_vertex_buffer(0, self.billboard_vb.slice(..));
            pass.set_vertex_buffer(1, self.particle_instances.slice(self.particle_count));
            pass.draw(0..6, 0..self.particle_count);
        }
    }
}
