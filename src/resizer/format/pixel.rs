use std::fmt;

/// Four-character code of a capture memory format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCc([u8; 4]);

impl FourCc {
    pub const NV12: Self = Self::new(*b"NV12");
    pub const NV21: Self = Self::new(*b"NV21");
    pub const NV16: Self = Self::new(*b"NV16");
    pub const NV61: Self = Self::new(*b"NV61");
    pub const NV24: Self = Self::new(*b"NV24");
    pub const NV42: Self = Self::new(*b"NV42");
    pub const YUYV: Self = Self::new(*b"YUYV");
    pub const YVYU: Self = Self::new(*b"YVYU");
    pub const UYVY: Self = Self::new(*b"UYVY");
    pub const VYUY: Self = Self::new(*b"VYUY");
    pub const YU12: Self = Self::new(*b"YU12");
    pub const YV12: Self = Self::new(*b"YV12");
    pub const YUV422P: Self = Self::new(*b"422P");
    pub const GREY: Self = Self::new(*b"GREY");

    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Little-endian u32 encoding.
    pub fn to_u32(self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    /// Chroma subsampling of this memory format, if it is a known YUV layout.
    pub fn chroma_divisors(self) -> Option<ChromaDivisors> {
        let (hdiv, vdiv) = match &self.0 {
            b"NV12" | b"NV21" | b"YU12" | b"YV12" => (2, 2),
            b"NV16" | b"NV61" | b"YUYV" | b"YVYU" | b"UYVY" | b"VYUY" | b"422P" => (2, 1),
            b"NV24" | b"NV42" | b"GREY" => (1, 1),
            _ => return None,
        };
        Some(ChromaDivisors { hdiv, vdiv })
    }
}

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(s) => write!(f, "{s}"),
            Err(_) => write!(f, "0x{:08x}", self.to_u32()),
        }
    }
}

/// Horizontal and vertical chroma divisors relative to luma.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromaDivisors {
    pub hdiv: u32,
    pub vdiv: u32,
}

/// The ISP always hands the resizer 4:2:2 chroma.
pub const SINK_CHROMA_DIVISORS: ChromaDivisors = ChromaDivisors { hdiv: 2, vdiv: 1 };
