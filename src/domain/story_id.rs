#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryId(String);

impl StoryId {
    /// Returns an instance of `StoryId` if the input is a usable identifier,
    /// i.e. it is not empty once surrounding whitespace is removed.
    pub fn parse(s: String) -> Result<StoryId, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err(format!("{:?} is not a valid story id.", s))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl AsRef<str> for StoryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
