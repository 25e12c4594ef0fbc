//! Name based inclusion/exclusion filters.
//!
//! The aggregator only sees `Fn(&str) -> bool`; this module is one way for a
//! caller to build such predicates from name patterns and extension lists.

use crate::error::Result;
use cloc_core::language::extension_of;
use globset::{Glob, GlobSet, GlobSetBuilder};
use hashbrown::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// 一致したものだけを残す
    Include,
    /// 一致したものを除く
    Exclude,
}

/// 名前と拡張子によるフィルタ
#[derive(Debug, Clone)]
pub struct NameFilter {
    mode: FilterMode,
    names: GlobSet,
    extensions: HashSet<String>,
}

impl NameFilter {
    /// Builds a filter. Names are glob patterns (a plain name matches itself);
    /// extensions are compared case-insensitively, with or without a leading dot.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::Pattern`] for an invalid glob.
    pub fn new<S: AsRef<str>>(mode: FilterMode, names: &[S], extensions: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for name in names {
            builder.add(Glob::new(name.as_ref())?);
        }

        let extensions = extensions
            .iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();

        Ok(Self {
            mode,
            names: builder.build()?,
            extensions,
        })
    }

    /// Filter over names only, as used for directories.
    ///
    /// # Errors
    ///
    /// See [`NameFilter::new`].
    pub fn names<S: AsRef<str>>(mode: FilterMode, names: &[S]) -> Result<Self> {
        Self::new(mode, names, &[])
    }

    #[must_use]
    pub fn accepts(&self, name: &str) -> bool {
        let hit = self.names.is_match(name)
            || (!self.extensions.is_empty()
                && self
                    .extensions
                    .contains(&extension_of(name).to_ascii_lowercase()));

        match self.mode {
            FilterMode::Include => hit,
            FilterMode::Exclude => !hit,
        }
    }
}
