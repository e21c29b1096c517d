use super::helpers::{uniform_layout_entry, ADDITIVE_BLENDING, DEPTH_FORMAT, HDR_FORMAT};
use scrollfield_core::{Camera, LineMesh, MeshInstance, SceneFrame, StarField};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    eye: [f32; 4],          // xyz, ambient intensity
    spot_pos: [f32; 4],     // xyz, intensity
    spot_dir: [f32; 4],     // xyz, cos outer
    spot_color: [f32; 4],   // rgb, cos inner
    point_pos: [f32; 4],    // xyz, intensity
    point_color: [f32; 4],  // rgb, unused
    star_params: [f32; 4],  // rotation_y, point_size, opacity, unused
    star_color: [f32; 4],
    grid_params: [f32; 4],  // y, cell size, section size, fade distance
    grid_cell: [f32; 4],
    grid_section: [f32; 4],
}

impl SceneUniforms {
    pub(crate) fn new(frame: &SceneFrame, camera: &Camera) -> Self {
        let l = &frame.lights;
        let cos_outer = l.spot.angle.cos();
        let cos_inner = (l.spot.angle * (1.0 - l.spot.penumbra)).cos();
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection_matrix().to_cols_array_2d(),
            eye: camera.eye.extend(l.ambient).to_array(),
            spot_pos: l.spot.position.extend(l.spot.intensity).to_array(),
            spot_dir: l.spot.direction.extend(cos_outer).to_array(),
            spot_color: l.spot.color.extend(cos_inner).to_array(),
            point_pos: l.point.position.extend(l.point.intensity).to_array(),
            point_color: l.point.color.extend(0.0).to_array(),
            star_params: [
                frame.stars.rotation_y,
                frame.stars.point_size,
                frame.stars.opacity,
                0.0,
            ],
            star_color: frame.stars.color.extend(1.0).to_array(),
            grid_params: [
                frame.grid.y,
                frame.grid.cell_size,
                frame.grid.section_size,
                frame.grid.fade_distance,
            ],
            grid_cell: frame.grid.cell_color.extend(1.0).to_array(),
            grid_section: frame.grid.section_color.extend(1.0).to_array(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    model: [[f32; 4]; 4],
    color: [f32; 4],    // rgb, opacity
    emissive: [f32; 4], // rgb, unused
}

impl From<&MeshInstance> for InstanceRaw {
    fn from(m: &MeshInstance) -> Self {
        Self {
            model: m.model.to_cols_array_2d(),
            color: m.color.extend(m.opacity).to_array(),
            emissive: m.emissive.extend(0.0).to_array(),
        }
    }
}

/// Uploaded wireframe: positions plus a line-list index buffer.
pub(crate) struct LineBuffers {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
}

impl LineBuffers {
    pub(crate) fn new(device: &wgpu::Device, label: &str, mesh: &LineMesh) -> Self {
        let positions: Vec<[f32; 3]> = mesh.positions.iter().map(|p| p.to_array()).collect();
        let indices = mesh.line_indices();
        Self {
            vertices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(&positions),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            indices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            }),
            index_count: indices.len() as u32,
        }
    }
}

pub(crate) struct ScenePipelines {
    pub(crate) bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    mesh_pipeline: wgpu::RenderPipeline,
    grid_pipeline: wgpu::RenderPipeline,
    star_pipeline: wgpu::RenderPipeline,
}

fn depth_state(write: bool) -> Option<wgpu::DepthStencilState> {
    Some(wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: write,
        depth_compare: wgpu::CompareFunction::LessEqual,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    })
}

#[allow(clippy::too_many_arguments)]
fn make_scene_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    label: &str,
    vs_entry: &str,
    fs_entry: &str,
    buffers: &[wgpu::VertexBufferLayout],
    topology: wgpu::PrimitiveTopology,
    blend: wgpu::BlendState,
    depth_write: bool,
    sample_count: u32,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(vs_entry),
            buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology,
            ..Default::default()
        },
        depth_stencil: depth_state(depth_write),
        multisample: wgpu::MultisampleState {
            count: sample_count,
            ..Default::default()
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(fs_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format: HDR_FORMAT,
                blend: Some(blend),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
    1 => Float32x4, 2 => Float32x4, 3 => Float32x4, 4 => Float32x4,
    5 => Float32x4, 6 => Float32x4
];
const STAR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x4];

pub(crate) fn create_scene_pipelines(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    sample_count: u32,
) -> ScenePipelines {
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[uniform_layout_entry(
            0,
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        )],
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_uniforms"),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });

    let mesh_buffers = [
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &POSITION_ATTRS,
        },
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        },
    ];
    let star_buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 4]>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &STAR_ATTRS,
    }];

    let mesh_pipeline = make_scene_pipeline(
        device,
        &layout,
        shader,
        "mesh_pipeline",
        "vs_mesh",
        "fs_mesh",
        &mesh_buffers,
        wgpu::PrimitiveTopology::LineList,
        wgpu::BlendState::ALPHA_BLENDING,
        true,
        sample_count,
    );
    let grid_pipeline = make_scene_pipeline(
        device,
        &layout,
        shader,
        "grid_pipeline",
        "vs_grid",
        "fs_grid",
        &[],
        wgpu::PrimitiveTopology::TriangleList,
        wgpu::BlendState::ALPHA_BLENDING,
        false,
        sample_count,
    );
    let star_pipeline = make_scene_pipeline(
        device,
        &layout,
        shader,
        "star_pipeline",
        "vs_star",
        "fs_star",
        &star_buffers,
        wgpu::PrimitiveTopology::TriangleList,
        ADDITIVE_BLENDING,
        false,
        sample_count,
    );

    ScenePipelines {
        bind_group,
        uniform_buffer,
        mesh_pipeline,
        grid_pipeline,
        star_pipeline,
    }
}

/// Per-frame GPU data for the scene pass.
pub(crate) struct SceneBuffers {
    central: LineBuffers,
    node: LineBuffers,
    instances: wgpu::Buffer,
    instance_capacity: usize,
    instance_count: u32,
    stars: wgpu::Buffer,
    star_count: u32,
    uploaded_generation: Option<u64>,
}

impl SceneBuffers {
    pub(crate) fn new(device: &wgpu::Device, central: &LineMesh, node: &LineMesh) -> Self {
        let instance_capacity = 16;
        Self {
            central: LineBuffers::new(device, "central_mesh", central),
            node: LineBuffers::new(device, "node_mesh", node),
            instances: create_instance_buffer(device, instance_capacity),
            instance_capacity,
            instance_count: 0,
            stars: create_star_buffer(device, &[]),
            star_count: 0,
            uploaded_generation: None,
        }
    }

    /// Re-upload the starfield only when the field generation moved.
    pub(crate) fn sync_stars(&mut self, device: &wgpu::Device, generation: u64, stars: &StarField) {
        if self.uploaded_generation == Some(generation) {
            return;
        }
        let packed: Vec<[f32; 4]> = stars
            .stars
            .iter()
            .map(|s| s.position.extend(s.size).to_array())
            .collect();
        self.stars = create_star_buffer(device, &packed);
        self.star_count = packed.len() as u32;
        self.uploaded_generation = Some(generation);
        log::info!("[gpu] uploaded {} stars (generation {})", self.star_count, generation);
    }

    pub(crate) fn write_instances(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, frame: &SceneFrame) {
        let raw: Vec<InstanceRaw> = std::iter::once(&frame.central)
            .chain(frame.nodes.iter())
            .map(InstanceRaw::from)
            .collect();
        if raw.len() > self.instance_capacity {
            self.instance_capacity = raw.len().next_power_of_two();
            self.instances = create_instance_buffer(device, self.instance_capacity);
        }
        queue.write_buffer(&self.instances, 0, bytemuck::cast_slice(&raw));
        self.instance_count = raw.len() as u32;
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("mesh_instances"),
        size: (capacity * std::mem::size_of::<InstanceRaw>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_star_buffer(device: &wgpu::Device, packed: &[[f32; 4]]) -> wgpu::Buffer {
    // keep a non-empty allocation so the buffer stays bindable at zero stars
    let contents: &[[f32; 4]] = if packed.is_empty() { &[[0.0; 4]] } else { packed };
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("star_instances"),
        contents: bytemuck::cast_slice(contents),
        usage: wgpu::BufferUsages::VERTEX,
    })
}

impl ScenePipelines {
    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, uniforms: &SceneUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Opaque-ish wireframes first so they write depth, then the grid and
    /// additive stars test against it.
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, buffers: &SceneBuffers) {
        rpass.set_bind_group(0, &self.bind_group, &[]);

        if buffers.instance_count > 0 {
            rpass.set_pipeline(&self.mesh_pipeline);
            rpass.set_vertex_buffer(1, buffers.instances.slice(..));
            rpass.set_vertex_buffer(0, buffers.central.vertices.slice(..));
            rpass.set_index_buffer(buffers.central.indices.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..buffers.central.index_count, 0, 0..1);
            if buffers.instance_count > 1 {
                rpass.set_vertex_buffer(0, buffers.node.vertices.slice(..));
                rpass.set_index_buffer(buffers.node.indices.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..buffers.node.index_count, 0, 1..buffers.instance_count);
            }
        }

        rpass.set_pipeline(&self.grid_pipeline);
        rpass.draw(0..6, 0..1);

        if buffers.star_count > 0 {
            rpass.set_pipeline(&self.star_pipeline);
            rpass.set_vertex_buffer(0, buffers.stars.slice(..));
            rpass.draw(0..6, 0..buffers.star_count);
        }
    }
}
