//! Resizer unit
//!
//! One resizer instance: its pad state, the negotiation operations feeding the
//! scale planner, and the stream controller that programs the hardware.

use tracing::{debug, instrument, warn};

use crate::resizer::common::error::{ResizerError, Result};
use crate::resizer::config::DeviceConfig;
use crate::resizer::dual_crop::{configure_dual_crop, disable_dual_crop};
use crate::resizer::format::{
    mbus_info, FormatKind, FourCc, MbusCode, MbusCodeSource, DEFAULT_CODE, DEFAULT_FORMAT_KIND,
    SINK_CHROMA_DIVISORS,
};
use crate::resizer::hw::{HwProfile, RegisterIo, MAIN_PATH_PROFILE, SELF_PATH_PROFILE};
use crate::resizer::pad::{adjust_crop, align_even, FrameFormat, Pad, PadConfig, Rect, SelectionTarget, Which};
use crate::resizer::scale::{disable_scaler, plan_scaling, program_scaler, ScalePlan, Size};
use crate::resizer::shadow::ShadowUpdate;

/// Pad of the ISP whose code list the resizer accepts.
const ISP_PAD_SINK_VIDEO: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathId {
    MainPath,
    SelfPath,
}

impl PathId {
    pub const ALL: [PathId; 2] = [PathId::MainPath, PathId::SelfPath];

    pub fn index(self) -> usize {
        match self {
            PathId::MainPath => 0,
            PathId::SelfPath => 1,
        }
    }

    pub fn sibling(self) -> PathId {
        match self {
            PathId::MainPath => PathId::SelfPath,
            PathId::SelfPath => PathId::MainPath,
        }
    }

    pub fn profile(self) -> &'static HwProfile {
        match self {
            PathId::MainPath => &MAIN_PATH_PROFILE,
            PathId::SelfPath => &SELF_PATH_PROFILE,
        }
    }

    pub fn dev_name(self) -> &'static str {
        match self {
            PathId::MainPath => "rkisp1_resizer_mainpath",
            PathId::SelfPath => "rkisp1_resizer_selfpath",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    Stopped,
    Streaming,
}

/// Answer of a code enumeration, reported on the pad the caller asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MbusCodeEnum {
    pub pad: Pad,
    pub index: u32,
    pub code: MbusCode,
}

#[derive(Debug, Clone)]
pub struct ResizerUnit {
    id: PathId,
    profile: &'static HwProfile,
    config: DeviceConfig,
    active: PadConfig,
    trial: PadConfig,
    fmt_kind: FormatKind,
    capture_format: FourCc,
    state: StreamState,
}

impl ResizerUnit {
    pub fn new(id: PathId, config: &DeviceConfig) -> Self {
        let pads = init_config(config);
        Self {
            id,
            profile: id.profile(),
            config: config.clone(),
            active: pads,
            trial: pads,
            fmt_kind: mbus_info(config.default_code)
                .map(|info| info.kind)
                .unwrap_or(DEFAULT_FORMAT_KIND),
            capture_format: config.default_capture_format,
            state: StreamState::Stopped,
        }
    }

    pub fn id(&self) -> PathId {
        self.id
    }

    pub fn profile(&self) -> &'static HwProfile {
        self.profile
    }

    /// Classification of the active sink code.
    pub fn format_kind(&self) -> FormatKind {
        self.fmt_kind
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    pub fn is_streaming(&self) -> bool {
        self.state == StreamState::Streaming
    }

    pub fn capture_format(&self) -> FourCc {
        self.capture_format
    }

    /// Memory format of the capture path fed by this unit. Decides the
    /// chroma subsampling of the source side.
    pub fn set_capture_format(&mut self, fourcc: FourCc) {
        self.capture_format = fourcc;
    }

    pub fn pads(&self, which: Which) -> &PadConfig {
        match which {
            Which::Try => &self.trial,
            Which::Active => &self.active,
        }
    }

    fn pads_mut(&mut self, which: Which) -> &mut PadConfig {
        match which {
            Which::Try => &mut self.trial,
            Which::Active => &mut self.active,
        }
    }

    /// Drop any trial negotiation and start over from the defaults.
    pub fn reset_trial(&mut self) {
        self.trial = init_config(&self.config);
    }

    pub fn enum_mbus_code<S: MbusCodeSource>(&self, upstream: &S, pad: Pad, index: u32) -> Result<MbusCodeEnum> {
        // The accepted codes are those of the ISP sink pad.
        let code = upstream.enum_mbus_code(ISP_PAD_SINK_VIDEO, index)?;
        Ok(MbusCodeEnum { pad, index, code })
    }

    pub fn get_format(&self, pad: Pad, which: Which) -> FrameFormat {
        *self.pads(which).format(pad)
    }

    /// Apply a format to a pad and return what was actually set.
    #[instrument(skip(self), fields(path = ?self.id))]
    pub fn set_format(&mut self, pad: Pad, which: Which, format: FrameFormat) -> FrameFormat {
        match pad {
            Pad::Sink => self.set_sink_fmt(which, format),
            Pad::Source => self.set_src_fmt(which, format),
        }
    }

    fn set_src_fmt(&mut self, which: Which, format: FrameFormat) -> FrameFormat {
        let profile = self.profile;
        let src_fmt = &mut self.pads_mut(which).src_fmt;

        src_fmt.width = profile.clamp_width(format.width);
        src_fmt.height = profile.clamp_height(format.height);

        *src_fmt
    }

    fn set_sink_fmt(&mut self, which: Which, format: FrameFormat) -> FrameFormat {
        let (code, kind) = match mbus_info(format.code) {
            Some(info) => (info.code, info.kind),
            None => {
                debug!("unsupported code {}, falling back to {}", format.code, DEFAULT_CODE);
                (DEFAULT_CODE, DEFAULT_FORMAT_KIND)
            }
        };
        if which == Which::Active {
            self.fmt_kind = kind;
        }

        let profile = self.profile;
        let pads = self.pads_mut(which);
        pads.sink_fmt = FrameFormat::new(
            profile.clamp_width(format.width),
            profile.clamp_height(format.height),
            code,
        );
        // The resizer never converts, the source always carries the sink code.
        pads.src_fmt.code = code;
        let sink_fmt = pads.sink_fmt;

        self.set_sink_crop(which, Rect::full(&sink_fmt));

        sink_fmt
    }

    fn set_sink_crop(&mut self, which: Which, r: Rect) -> Rect {
        let (min_width, min_height) = (self.config.min_crop_width, self.config.min_crop_height);
        let id = self.id;
        let pads = self.pads_mut(which);

        let kind = mbus_info(pads.sink_fmt.code)
            .map(|info| info.kind)
            .unwrap_or(DEFAULT_FORMAT_KIND);

        // No crop for raw data on the main path
        if id == PathId::MainPath && kind == FormatKind::Bayer {
            pads.sink_crop = Rect::full(&pads.sink_fmt);
            return pads.sink_crop;
        }

        let mut crop = Rect::new(align_even(r.left), r.top, r.width & !1, r.height);
        adjust_crop(&mut crop, &pads.sink_fmt, min_width, min_height);
        pads.sink_crop = crop;

        crop
    }

    pub fn get_selection(&self, pad: Pad, target: SelectionTarget, which: Which) -> Result<Rect> {
        if pad == Pad::Source {
            return Err(ResizerError::InvalidPad(pad));
        }

        let pads = self.pads(which);
        match target {
            SelectionTarget::CropBounds => Ok(Rect::full(&pads.sink_fmt)),
            SelectionTarget::Crop => Ok(pads.sink_crop),
            other => Err(ResizerError::InvalidSelectionTarget(other)),
        }
    }

    /// Set the sink crop and return the rectangle actually applied.
    pub fn set_selection(&mut self, pad: Pad, target: SelectionTarget, which: Which, r: Rect) -> Result<Rect> {
        if pad == Pad::Source {
            return Err(ResizerError::InvalidPad(pad));
        }
        if target != SelectionTarget::Crop {
            return Err(ResizerError::InvalidSelectionTarget(target));
        }

        debug!(
            "{:?}: pad: {:?} sel({},{})/{}x{}",
            self.id, pad, r.left, r.top, r.width, r.height
        );

        Ok(self.set_sink_crop(which, r))
    }

    /// Scale plan for the active pad state.
    pub fn scale_plan(&self) -> ScalePlan {
        let src_div = match self.fmt_kind {
            FormatKind::Yuv => self
                .capture_format
                .chroma_divisors()
                .unwrap_or(SINK_CHROMA_DIVISORS),
            FormatKind::Bayer => SINK_CHROMA_DIVISORS,
        };
        let crop = &self.active.sink_crop;
        let src = &self.active.src_fmt;

        plan_scaling(
            self.fmt_kind,
            Size::new(crop.width, crop.height),
            Size::new(src.width, src.height),
            src_div,
        )
    }

    /// Program scaler and dual crop from the active pad state.
    ///
    /// With the sibling path streaming, the commit waits for the next frame
    /// end so the sibling's frame in flight is not torn.
    #[instrument(skip(self, regs), fields(path = ?self.id))]
    pub fn start_stream<R: RegisterIo>(&mut self, regs: &mut R, sibling_streaming: bool) {
        if self.is_streaming() {
            warn!("stream already started");
            return;
        }

        let when = if sibling_streaming {
            ShadowUpdate::Async
        } else {
            ShadowUpdate::Sync
        };
        debug!(?when, "starting stream");

        let plan = self.scale_plan();
        program_scaler(regs, &self.profile.rsz, &plan, when);
        configure_dual_crop(regs, &self.profile.dual_crop, &self.active.sink_fmt, &self.active.sink_crop);

        self.state = StreamState::Streaming;
    }

    /// Disable dual crop and scaler. Always deferred to the frame end so the
    /// sibling path keeps its live frame.
    #[instrument(skip(self, regs), fields(path = ?self.id))]
    pub fn stop_stream<R: RegisterIo>(&mut self, regs: &mut R) {
        if !self.is_streaming() {
            warn!("stream already stopped");
            return;
        }

        disable_dual_crop(regs, &self.profile.dual_crop, ShadowUpdate::Async);
        disable_scaler(regs, &self.profile.rsz, ShadowUpdate::Async);

        self.state = StreamState::Stopped;
    }
}

fn init_config(config: &DeviceConfig) -> PadConfig {
    PadConfig::new(config.default_width, config.default_height, config.default_code)
}
