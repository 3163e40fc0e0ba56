use core::fmt;

/// Vector instruction set used by the batched multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SimdLevel {
    /// Portable 4-lane scalar accumulation.
    None,
    /// ARM NEON, `vmull_u32` on 2x2 lanes.
    Neon,
    /// x86 AVX2, `_mm256_mul_epu32` on 4 lanes.
    Avx2,
}

impl SimdLevel {
    /// Highest level supported by the running CPU.
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if std::is_x86_feature_detected!("avx2") {
                return SimdLevel::Avx2;
            }
            SimdLevel::None
        }

        #[cfg(target_arch = "aarch64")]
        {
            // baseline on aarch64
            SimdLevel::Neon
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            SimdLevel::None
        }
    }

    pub fn is_available(self) -> bool {
        match self {
            SimdLevel::None => true,
            #[cfg(target_arch = "x86_64")]
            SimdLevel::Avx2 => std::is_x86_feature_detected!("avx2"),
            #[cfg(target_arch = "aarch64")]
            SimdLevel::Neon => true,
            #[allow(unreachable_patterns)]
            _ => false,
        }
    }

    /// `self` if the running CPU supports it, [`SimdLevel::None`] otherwise.
    #[inline]
    pub fn or_portable(self) -> Self {
        if self.is_available() {
            self
        } else {
            SimdLevel::None
        }
    }
}

impl fmt::Display for SimdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimdLevel::None => write!(f, "portable"),
            SimdLevel::Neon => write!(f, "NEON"),
            SimdLevel::Avx2 => write!(f, "AVX2"),
        }
    }
}

/// Whether the batched multiplier runs on vector instructions on this CPU.
#[inline]
pub fn simd_available() -> bool {
    SimdLevel::detect() != SimdLevel::None
}
