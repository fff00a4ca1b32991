use anyhow::Context;
use isp_resizer::logger;
use isp_resizer::resizer::{
    DeviceConfig, FourCc, FrameFormat, LocalRegistry, MbusCode, Pad, PathId, Rect, ResizerDevice,
    SelectionTarget, SimulatedRegisters, Which,
};

use tracing::info;

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting isp-resizer...");

    let config = DeviceConfig::builder()
        .default_size(1920, 1080)
        .default_capture_format(FourCc::NV12)
        .build();
    let mut registry = LocalRegistry::new();
    let mut device = ResizerDevice::register(&mut registry, SimulatedRegisters::new(), config)
        .context("registering resizer units")?;

    info!("Resizers registered: {:?}", registry.names());

    // Main path: full-resolution capture out of a 4K sensor crop.
    let sink = device.set_format(
        PathId::MainPath,
        Pad::Sink,
        Which::Active,
        FrameFormat::new(3840, 2160, MbusCode::YUYV8_2X8),
    );
    let src = device.set_format(
        PathId::MainPath,
        Pad::Source,
        Which::Active,
        FrameFormat::new(1920, 1080, sink.code),
    );
    info!("Main path: {}x{} -> {}x{}", sink.width, sink.height, src.width, src.height);

    // Self path: centered preview window, downscaled.
    device.set_format(
        PathId::SelfPath,
        Pad::Sink,
        Which::Active,
        FrameFormat::new(1920, 1080, MbusCode::YUYV8_2X8),
    );
    let crop = device
        .set_selection(
            PathId::SelfPath,
            Pad::Sink,
            SelectionTarget::Crop,
            Which::Active,
            Rect::new(240, 0, 1440, 1080),
        )
        .context("setting self path crop")?;
    device.set_format(
        PathId::SelfPath,
        Pad::Source,
        Which::Active,
        FrameFormat::new(640, 480, MbusCode::YUYV8_2X8),
    );
    info!("Self path crop: {:?}", crop);

    for id in PathId::ALL {
        info!("{:?} plan: {:?}", id, device.unit(id).scale_plan());
        device.start_stream(id);
    }
    device.regs_mut().frame_end();
    info!("Register writes: {}", device.regs().writes().len());

    device.stop_stream(PathId::SelfPath);
    device.stop_stream(PathId::MainPath);
    device.regs_mut().frame_end();

    device.unregister(&mut registry);
    info!("Resizers unregistered");

    Ok(())
}
