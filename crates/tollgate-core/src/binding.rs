use crate::context::Context;

/// Declares which context keys a condition reads.
///
/// Resolved at construction time, so a condition's required and optional
/// keys can be inspected without running it. Required keys are validated
/// before evaluation; optional keys are forwarded when present and
/// silently dropped otherwise. A catch-all binding forwards the whole bag
/// instead of a projection, for conditions that inspect open-ended input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binding {
    required: Vec<String>,
    optional: Vec<String>,
    catch_all: bool,
}

impl Binding {
    /// No declared keys: `evaluate` sees an empty bag. Valid for constant
    /// conditions.
    pub const fn none() -> Self {
        Self {
            required: Vec::new(),
            optional: Vec::new(),
            catch_all: false,
        }
    }

    /// Require every named key to be present in the context.
    pub fn require<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: keys.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Forward the full context bag instead of a projection.
    pub fn catch_all() -> Self {
        Self {
            catch_all: true,
            ..Self::default()
        }
    }

    /// Add keys that are forwarded when present but never validated.
    #[must_use]
    pub fn optional<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Keep the required-key validation but forward the full bag.
    #[must_use]
    pub fn accept_rest(mut self) -> Self {
        self.catch_all = true;
        self
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    pub fn is_catch_all(&self) -> bool {
        self.catch_all
    }

    /// First required key absent from `ctx`, if any.
    pub fn missing_key(&self, ctx: &Context) -> Option<&str> {
        self.required
            .iter()
            .map(String::as_str)
            .find(|key| !ctx.contains_key(key))
    }

    /// The subset of `ctx` this binding exposes to `evaluate`.
    pub fn relevant(&self, ctx: &Context) -> Context {
        if self.catch_all {
            return ctx.clone();
        }
        ctx.project(
            self.required
                .iter()
                .chain(self.optional.iter())
                .map(String::as_str),
        )
    }
}
