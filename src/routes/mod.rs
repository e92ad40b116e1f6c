mod health_check;
mod home;
mod subscriptions;

pub use health_check::*;
pub use home::*;
pub use subscriptions::*;

/// Write `e` followed by each of its sources, one per line. Used as the
/// `Debug` impl of our error enums, so that logs carry the whole chain.
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
