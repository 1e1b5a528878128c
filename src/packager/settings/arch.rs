//! CPU architecture types and utilities.

/// CPU architecture for packaged binaries.
///
/// Detected from the Rust target triple during descriptor generation and
/// mapped to the architecture labels packaging tools expect.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit)
    X86_64,
    /// x86 / i686 (32-bit)
    X86,
    /// AArch64 / ARM64 (64-bit)
    AArch64,
    /// ARM with hard-float (32-bit)
    Armhf,
    /// ARM with soft-float (32-bit)
    Armel,
    /// RISC-V (64-bit)
    Riscv64,
}

impl Arch {
    /// Returns the RPM `BuildArch` label for this architecture.
    pub fn rpm_arch(self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64",
            Self::X86 => "i686",
            Self::AArch64 => "aarch64",
            Self::Armhf => "armv7hl",
            Self::Armel => "armv6l",
            Self::Riscv64 => "riscv64",
        }
    }
}
