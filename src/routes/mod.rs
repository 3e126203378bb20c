mod admin;
mod contact;
mod health_check;
mod home;
mod login;
mod newsletter;

pub use admin::*;
pub use contact::*;
pub use health_check::*;
pub use home::*;
pub use login::*;
pub use newsletter::*;

/// Print an error and every `source` below it, one per line. Used for the
/// `Debug` impls of the route errors, so that logs show the whole chain.
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
