//! Device-level composition of the two resizer units.

mod registry;

use tracing::{error, info, instrument};

use crate::resizer::common::error::Result;
use crate::resizer::config::DeviceConfig;
use crate::resizer::format::{FourCc, MbusCodeSource};
use crate::resizer::hw::RegisterIo;
use crate::resizer::pad::{FrameFormat, Pad, Rect, SelectionTarget, Which};
use crate::resizer::unit::{MbusCodeEnum, PathId, ResizerUnit};

pub use registry::{
    EntityFunction, LocalRegistry, PadFlags, SubdevDescriptor, SubdevHandle, SubdevRegistry,
};

/// Both resizers of one ISP, sharing the register transport.
pub struct ResizerDevice<R: RegisterIo> {
    regs: R,
    units: [ResizerUnit; 2],
    handles: [SubdevHandle; 2],
}

fn descriptor(id: PathId) -> SubdevDescriptor {
    SubdevDescriptor {
        name: id.dev_name().to_string(),
        function: EntityFunction::VideoScaler,
        pads: [
            PadFlags::SINK | PadFlags::MUST_CONNECT,
            PadFlags::SOURCE | PadFlags::MUST_CONNECT,
        ],
    }
}

impl<R: RegisterIo> ResizerDevice<R> {
    /// Register the main path then the self path. If either fails, whatever
    /// was registered is torn down in reverse order and the error returned.
    #[instrument(skip_all)]
    pub fn register<G: SubdevRegistry>(registry: &mut G, regs: R, config: DeviceConfig) -> Result<Self> {
        let mut handles = [SubdevHandle(0); 2];

        for (i, id) in PathId::ALL.into_iter().enumerate() {
            match registry.register_subdev(&descriptor(id)) {
                Ok(handle) => handles[i] = handle,
                Err(e) => {
                    error!("Failed to register resizer subdev {}: {}", id.dev_name(), e);
                    for &handle in handles[..i].iter().rev() {
                        registry.unregister_subdev(handle);
                    }
                    return Err(e);
                }
            }
        }

        let units = PathId::ALL.map(|id| ResizerUnit::new(id, &config));
        info!("resizer subdevs registered");

        Ok(Self { regs, units, handles })
    }

    /// Unregister main path then self path and hand back the transport.
    pub fn unregister<G: SubdevRegistry>(self, registry: &mut G) -> R {
        for handle in self.handles {
            registry.unregister_subdev(handle);
        }
        self.regs
    }

    pub fn unit(&self, id: PathId) -> &ResizerUnit {
        &self.units[id.index()]
    }

    pub fn unit_mut(&mut self, id: PathId) -> &mut ResizerUnit {
        &mut self.units[id.index()]
    }

    pub fn handle(&self, id: PathId) -> SubdevHandle {
        self.handles[id.index()]
    }

    pub fn regs(&self) -> &R {
        &self.regs
    }

    pub fn regs_mut(&mut self) -> &mut R {
        &mut self.regs
    }

    pub fn enum_mbus_code<S: MbusCodeSource>(
        &self,
        id: PathId,
        upstream: &S,
        pad: Pad,
        index: u32,
    ) -> Result<MbusCodeEnum> {
        self.unit(id).enum_mbus_code(upstream, pad, index)
    }

    pub fn get_format(&self, id: PathId, pad: Pad, which: Which) -> FrameFormat {
        self.unit(id).get_format(pad, which)
    }

    pub fn set_format(&mut self, id: PathId, pad: Pad, which: Which, format: FrameFormat) -> FrameFormat {
        self.unit_mut(id).set_format(pad, which, format)
    }

    pub fn get_selection(&self, id: PathId, pad: Pad, target: SelectionTarget, which: Which) -> Result<Rect> {
        self.unit(id).get_selection(pad, target, which)
    }

    pub fn set_selection(
        &mut self,
        id: PathId,
        pad: Pad,
        target: SelectionTarget,
        which: Which,
        rect: Rect,
    ) -> Result<Rect> {
        self.unit_mut(id).set_selection(pad, target, which, rect)
    }

    pub fn set_capture_format(&mut self, id: PathId, fourcc: FourCc) {
        self.unit_mut(id).set_capture_format(fourcc);
    }

    pub fn start_stream(&mut self, id: PathId) {
        let sibling_streaming = self.unit(id.sibling()).is_streaming();
        let unit = &mut self.units[id.index()];
        unit.start_stream(&mut self.regs, sibling_streaming);
    }

    pub fn stop_stream(&mut self, id: PathId) {
        let unit = &mut self.units[id.index()];
        unit.stop_stream(&mut self.regs);
    }
}
