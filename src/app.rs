use std::ffi::OsString;

use crate::command::CommandSpec;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::notify::{Notification, Notifier, Outcome};
use crate::privilege::Privileges;
use crate::resolve::Resolver;
use crate::runner;

/// Wrap one program invocation and return its exit status.
///
/// Every check runs before anything is spawned, in this order: argument
/// count, privileges, notifier presence, program presence. Any failure
/// there is returned as an error without running the program or the
/// notifier.
pub async fn run<I>(argv: I, config: &Config, privileges: Privileges) -> Result<i32>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let spec = CommandSpec::from_args(argv)?;

    if privileges.is_superuser() {
        return Err(Error::Superuser);
    }

    let resolver = Resolver::new(config.general.bin_dirs.clone());
    let notifier_path = resolver
        .locate(&config.general.notifier)
        .map_err(Error::NotifierMissing)?;
    let program_path = resolver.locate(spec.program()).map_err(Error::ProgramMissing)?;

    tracing::info!(command = %spec.display(), path = %program_path.display(), "running");
    let status = runner::run(&program_path, &spec).await?;

    let notification = Notification::for_outcome(&spec, Outcome::from_status(status), &config.notification);
    Notifier::new(notifier_path, &config.notification)
        .send(&notification)
        .await;

    Ok(status)
}
