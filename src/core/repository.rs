//! Repository descriptions exchanged with the hosting platform

use clap::ValueEnum;

/// Repository visibility on the hosting platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    /// Build from a "should it be private?" answer
    pub fn from_private(private: bool) -> Self {
        if private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }

    pub fn is_private(self) -> bool {
        matches!(self, Visibility::Private)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

/// Attributes of a repository to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySpec {
    /// Repository name, used verbatim as the remote identifier
    pub name: String,
    pub description: String,
    pub visibility: Visibility,
}

impl RepositorySpec {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        visibility: Visibility,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            visibility,
        }
    }

    /// Description as sent to the API (empty means none)
    pub fn description(&self) -> Option<&str> {
        if self.description.is_empty() {
            None
        } else {
            Some(self.description.as_str())
        }
    }
}

/// Which clone address to wire up locally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CloneProtocol {
    #[default]
    Https,
    Ssh,
}

/// The platform's record of a created repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepository {
    /// Login of the owning account
    pub owner: String,
    pub name: String,
    pub private: bool,
    pub description: Option<String>,
    /// HTTPS clone address
    pub clone_url: String,
    /// SSH clone address
    pub ssh_url: String,
    /// Browser URL
    pub html_url: String,
}

impl RemoteRepository {
    /// `owner/name`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Clone address for the requested protocol
    ///
    /// Falls back to the HTTPS address when the platform did not report an SSH one.
    pub fn clone_address(&self, protocol: CloneProtocol) -> &str {
        match protocol {
            CloneProtocol::Ssh if !self.ssh_url.is_empty() => &self.ssh_url,
            _ => &self.clone_url,
        }
    }
}
