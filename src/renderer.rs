use std::sync::Arc;

use futures::executor::block_on;
use pong::pixel_buffer::{PixelBuffer, BYTES_PER_PIXEL};
use wgpu::{
    include_wgsl, AddressMode, BindGroup, BindGroupDescriptor, BindGroupEntry,
    BindGroupLayoutDescriptor, BindGroupLayoutEntry, BindingResource, BindingType, Color,
    ColorTargetState, ColorWrites, Device, DeviceDescriptor, Dx12Compiler, Extent3d, Features,
    FilterMode, FragmentState, FrontFace, Gles3MinorVersion, ImageDataLayout, Instance,
    InstanceDescriptor, InstanceFlags, LoadOp, MultisampleState, Operations,
    PipelineLayoutDescriptor, PolygonMode, PowerPreference, PresentMode, PrimitiveState,
    PrimitiveTopology, Queue, RenderPassColorAttachment, RenderPassDescriptor, RenderPipeline,
    RenderPipelineDescriptor, RequestAdapterOptions, SamplerBindingType, SamplerDescriptor,
    ShaderStages, StoreOp, Surface, SurfaceConfiguration, Texture, TextureDescriptor,
    TextureDimension, TextureFormat, TextureSampleType, TextureUsages, TextureViewDescriptor,
    TextureViewDimension, VertexState,
};
use winit::{event::WindowEvent, window::Window};

use crate::error::PlatformError;

// Byte order R, G, B, A matches the pixel buffer, so frames upload unconverted.
const FRAME_FORMAT: TextureFormat = TextureFormat::Rgba8Unorm;

pub struct Renderer {
    _instance: Instance,
    device: Device,
    queue: Queue,
    surface: Surface<'static>,
    config: SurfaceConfiguration,
    // Set while unfocused; some platforms invalidate the surface meanwhile.
    force_reconfig: bool,

    frame: Texture,
    frame_size: Extent3d,
    bind_group: BindGroup,
    pipeline: RenderPipeline,
}
impl Renderer {
    pub fn init(window: Arc<Window>, width: u32, height: u32) -> Result<Self, PlatformError> {
        let size = window.inner_size();

        let instance = Instance::new(InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            flags: InstanceFlags::empty(),
            dx12_shader_compiler: Dx12Compiler::Fxc,
            gles_minor_version: Gles3MinorVersion::Automatic,
        });

        let surface = instance.create_surface(window)?;
        let adapter = block_on(instance.request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .ok_or(PlatformError::NoAdapter)?;
        log::info!("using adapter {:?}", adapter.get_info().name);

        let mut config = surface
            .get_default_config(&adapter, size.width, size.height)
            .ok_or(PlatformError::UnsupportedSurface)?;
        config.present_mode = PresentMode::Fifo;

        let (device, queue) = block_on(adapter.request_device(
            &DeviceDescriptor {
                label: None,
                required_features: Features::empty(),
                required_limits: adapter.limits(),
            },
            None,
        ))?;

        surface.configure(&device, &config);

        let frame_size = Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let frame = device.create_texture(&TextureDescriptor {
            label: Some("frame"),
            size: frame_size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: TextureDimension::D2,
            format: FRAME_FORMAT,
            usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let (bind_group, pipeline) = create_render_pipeline(&device, &config, &frame);

        Ok(Self {
            _instance: instance,
            device,
            queue,
            surface,
            config,
            force_reconfig: false,
            frame,
            frame_size,
            bind_group,
            pipeline,
        })
    }

    /// The window is fixed-size, but a scale-factor change still resizes
    /// its surface, so `Resized` is followed.
    pub fn window_event(&mut self, ev: &WindowEvent) {
        match ev {
            &WindowEvent::Focused(focus) => self.force_reconfig = !focus,
            &WindowEvent::Resized(size) if size.width > 0 && size.height > 0 => {
                self.config.width = size.width;
                self.config.height = size.height;
                self.surface.configure(&self.device, &self.config);
            }
            _ => (),
        }
    }

    pub fn upload_pixels(&mut self, pixels: &PixelBuffer) {
        self.queue.write_texture(
            self.frame.as_image_copy(),
            pixels.as_bytes(),
            ImageDataLayout {
                offset: 0,
                bytes_per_row: Some((pixels.width() * BYTES_PER_PIXEL) as u32),
                rows_per_image: Some(pixels.height() as u32),
            },
            self.frame_size,
        );
    }

    fn acquire(&mut self) -> Result<wgpu::SurfaceTexture, PlatformError> {
        let surface = &mut self.surface;

        let frame = match surface.get_current_texture() {
            Ok(frame) => frame,
            // If we timed out, just try again
            Err(wgpu::SurfaceError::Timeout) => surface.get_current_texture()?,
            Err(
                // If the surface is outdated, or was lost, reconfigure it.
                wgpu::SurfaceError::Outdated
                | wgpu::SurfaceError::Lost
                | wgpu::SurfaceError::OutOfMemory,
            ) => {
                log::debug!("reconfiguring surface");
                surface.configure(&self.device, &self.config);
                surface.get_current_texture()?
            }
        };
        Ok(frame)
    }
    pub fn render(&mut self) -> Result<(), PlatformError> {
        if self.force_reconfig {
            self.surface.configure(&self.device, &self.config);
        }
        let tex = self.acquire()?;

        let mut cmd = self.device.create_command_encoder(&Default::default());
        {
            let view = tex.texture.create_view(&TextureViewDescriptor::default());
            let mut pass = cmd.begin_render_pass(&RenderPassDescriptor {
                label: None,
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(Color::BLACK),
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.bind_group, &[]);
            pass.draw(0..6, 0..1);
        }

        self.queue.submit(Some(cmd.finish()));
        tex.present();
        Ok(())
    }
}

fn create_render_pipeline(
    device: &Device,
    config: &SurfaceConfiguration,
    frame: &Texture,
) -> (BindGroup, RenderPipeline) {
    let sampler = device.create_sampler(&SamplerDescriptor {
        label: None,
        address_mode_u: AddressMode::ClampToEdge,
        address_mode_v: AddressMode::ClampToEdge,
        address_mode_w: AddressMode::ClampToEdge,
        mag_filter: FilterMode::Nearest,
        min_filter: FilterMode::Nearest,
        mipmap_filter: FilterMode::Nearest,
        ..Default::default()
    });

    let bind_group_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: None,
        entries: &[
            BindGroupLayoutEntry {
                binding: 0,
                visibility: ShaderStages::FRAGMENT,
                ty: BindingType::Texture {
                    sample_type: TextureSampleType::Float { filterable: false },
                    view_dimension: TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            BindGroupLayoutEntry {
                binding: 1,
                visibility: ShaderStages::FRAGMENT,
                ty: BindingType::Sampler(SamplerBindingType::NonFiltering),
                count: None,
            },
        ],
    });

    let view = frame.create_view(&Default::default());
    let bind_group = device.create_bind_group(&BindGroupDescriptor {
        label: None,
        layout: &bind_group_layout,
        entries: &[
            BindGroupEntry {
                binding: 0,
                resource: BindingResource::TextureView(&view),
            },
            BindGroupEntry {
                binding: 1,
                resource: BindingResource::Sampler(&sampler),
            },
        ],
    });

    let layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: None,
        bind_group_layouts: &[&bind_group_layout],
        push_constant_ranges: &[],
    });

    let src = include_wgsl!("shader.wgsl");
    let module = device.create_shader_module(src);

    let pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
        label: None,
        layout: Some(&layout),
        vertex: VertexState {
            module: &module,
            entry_point: "vs_main",
            buffers: &[],
        },
        primitive: PrimitiveState {
            topology: PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: FrontFace::Ccw,
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: None,
        multisample: MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        fragment: Some(FragmentState {
            module: &module,
            entry_point: "fs_main",
            targets: &[Some(ColorTargetState {
                format: config.format,
                blend: None,
                write_mask: ColorWrites::ALL,
            })],
        }),
        multiview: None,
    });

    (bind_group, pipeline)
}
