/// Effective identity the tool is running under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privileges {
    Unprivileged,
    Superuser,
}

impl Privileges {
    /// Query the effective UID of this process.
    pub fn current() -> Self {
        // SAFETY: geteuid has no preconditions and cannot fail.
        let euid = unsafe { libc::geteuid() };
        Self::from_euid(euid)
    }

    pub fn from_euid(euid: libc::uid_t) -> Self {
        if euid == 0 {
            Privileges::Superuser
        } else {
            Privileges::Unprivileged
        }
    }

    pub fn is_superuser(self) -> bool {
        self == Privileges::Superuser
    }
}
