use tracing::debug;

use crate::resizer::format::{ChromaDivisors, FormatKind, SINK_CHROMA_DIVISORS};
use crate::resizer::hw::regs::RSZ_SCALER_FACTOR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn subsampled(self, div: ChromaDivisors) -> Self {
        Self::new(self.width / div.hdiv, self.height / div.vdiv)
    }
}

/// Scaling of one axis of one plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    /// Same length on both sides, the axis stays disabled.
    Unity,
    /// Sink shorter than source. Carries the ratio register value.
    Up(u32),
    /// Sink longer than source. Carries the ratio register value.
    Down(u32),
}

impl AxisScale {
    pub fn between(len_sink: u32, len_src: u32) -> Self {
        if len_sink == len_src {
            AxisScale::Unity
        } else if len_sink < len_src {
            AxisScale::Up(calc_ratio(len_sink, len_src))
        } else {
            AxisScale::Down(calc_ratio(len_sink, len_src))
        }
    }

    pub fn ratio(self) -> Option<u32> {
        match self {
            AxisScale::Unity => None,
            AxisScale::Up(ratio) | AxisScale::Down(ratio) => Some(ratio),
        }
    }
}

/// Per-axis scaling. Both chroma planes share `hc` and `vc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleRatios {
    pub hy: AxisScale,
    pub hc: AxisScale,
    pub vy: AxisScale,
    pub vc: AxisScale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalePlan {
    /// Scaler off, data passes through untouched.
    Bypass,
    Scale(ScaleRatios),
}

/// Fixed-point ratio register value. Lengths must differ and be at least 1.
pub fn calc_ratio(len_sink: u32, len_src: u32) -> u32 {
    if len_sink < len_src {
        return ((len_sink - 1) * RSZ_SCALER_FACTOR) / (len_src - 1);
    }

    ((len_src - 1) * RSZ_SCALER_FACTOR) / (len_sink - 1) + 1
}

/// Compute the scale plan from the sink crop size to the source format size.
///
/// `src_div` is the chroma subsampling of the capture memory format; the sink
/// side is always 4:2:2. When both chroma planes already match, the scaler is
/// bypassed even if a luma axis differs.
pub fn plan_scaling(kind: FormatKind, sink_y: Size, src_y: Size, src_div: ChromaDivisors) -> ScalePlan {
    if kind == FormatKind::Bayer {
        return ScalePlan::Bypass;
    }

    let sink_c = sink_y.subsampled(SINK_CHROMA_DIVISORS);
    let src_c = src_y.subsampled(src_div);

    if sink_c == src_c {
        return ScalePlan::Bypass;
    }

    debug!(
        "rsz/scale: {}x{} -> {}x{}",
        sink_y.width, sink_y.height, src_y.width, src_y.height
    );
    debug!(
        "chroma scaling {}x{} -> {}x{}",
        sink_c.width, sink_c.height, src_c.width, src_c.height
    );

    ScalePlan::Scale(ScaleRatios {
        hy: AxisScale::between(sink_y.width, src_y.width),
        hc: AxisScale::between(sink_c.width, src_c.width),
        vy: AxisScale::between(sink_y.height, src_y.height),
        vc: AxisScale::between(sink_c.height, src_c.height),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resizer::format::FourCc;

    fn divisors(fourcc: FourCc) -> ChromaDivisors {
        fourcc.chroma_divisors().unwrap()
    }

    #[test]
    fn test_upscale_ratio_truncates() {
        assert_eq!(calc_ratio(640, 1280), 32742);
        assert_eq!(AxisScale::between(640, 1280), AxisScale::Up(32742));
    }

    #[test]
    fn test_downscale_ratio_adds_one() {
        // (479 * 65536) / 1079 + 1
        assert_eq!(calc_ratio(1080, 480), 29094);
        assert_eq!(AxisScale::between(1080, 480), AxisScale::Down(29094));
    }

    #[test]
    fn test_equal_axis_is_unity() {
        assert_eq!(AxisScale::between(720, 720), AxisScale::Unity);
        assert_eq!(AxisScale::Unity.ratio(), None);
    }

    #[test]
    fn test_bayer_always_bypassed() {
        let plan = plan_scaling(
            FormatKind::Bayer,
            Size::new(1920, 1080),
            Size::new(640, 480),
            divisors(FourCc::YUYV),
        );
        assert_eq!(plan, ScalePlan::Bypass);
    }

    #[test]
    fn test_matching_chroma_bypasses() {
        let plan = plan_scaling(
            FormatKind::Yuv,
            Size::new(800, 600),
            Size::new(800, 600),
            divisors(FourCc::YUYV),
        );
        assert_eq!(plan, ScalePlan::Bypass);
    }

    #[test]
    fn test_odd_luma_difference_hidden_by_chroma_match() {
        // 801 / 2 == 800 / 2, so the one-pixel luma difference is not scaled.
        let plan = plan_scaling(
            FormatKind::Yuv,
            Size::new(801, 600),
            Size::new(800, 600),
            divisors(FourCc::YUYV),
        );
        assert_eq!(plan, ScalePlan::Bypass);
    }

    #[test]
    fn test_nv12_output_scales_chroma_vertically_only() {
        let plan = plan_scaling(
            FormatKind::Yuv,
            Size::new(1920, 1080),
            Size::new(1920, 1080),
            divisors(FourCc::NV12),
        );
        let ScalePlan::Scale(ratios) = plan else {
            panic!("expected scaling, got {plan:?}");
        };
        assert_eq!(ratios.hy, AxisScale::Unity);
        assert_eq!(ratios.vy, AxisScale::Unity);
        assert_eq!(ratios.hc, AxisScale::Unity);
        assert_eq!(ratios.vc, AxisScale::between(1080, 540));
        assert!(matches!(ratios.vc, AxisScale::Down(_)));
    }

    #[test]
    fn test_downscale_all_axes() {
        let plan = plan_scaling(
            FormatKind::Yuv,
            Size::new(1920, 1080),
            Size::new(640, 480),
            divisors(FourCc::YUYV),
        );
        assert_eq!(
            plan,
            ScalePlan::Scale(ScaleRatios {
                hy: AxisScale::Down(calc_ratio(1920, 640)),
                hc: AxisScale::Down(calc_ratio(960, 320)),
                vy: AxisScale::Down(calc_ratio(1080, 480)),
                vc: AxisScale::Down(calc_ratio(1080, 480)),
            })
        );
    }

    #[test]
    fn test_plan_is_deterministic() {
        let run = || {
            plan_scaling(
                FormatKind::Yuv,
                Size::new(1280, 720),
                Size::new(1920, 1080),
                divisors(FourCc::NV12),
            )
        };
        assert_eq!(run(), run());
    }
}
