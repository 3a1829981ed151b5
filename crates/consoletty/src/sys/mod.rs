#[cfg(target_family = "windows")]
mod windows;

#[cfg(target_family = "windows")]
pub(crate) use self::windows::prepare_output;

/// Prepare standard output for colored text and read its current colors.
///
/// Terminals other than the Windows console neither need preparation nor
/// expose their current colors, so both colors are the default.
#[cfg(not(target_family = "windows"))]
pub(crate) fn prepare_output() -> std::io::Result<(crate::Colorant, crate::Colorant)> {
    Ok((crate::Colorant::Default, crate::Colorant::Default))
}
