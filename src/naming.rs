//! CSS class-name resolution for the five naming conventions.
//!
//! Renderers never write a class name literally. They ask the run's
//! [`NamingConvention`] to resolve a `(base, modifier)` pair:
//!
//! | Style | `("nav", None)` | `("nav", Some("link"))` |
//! |-------|-----------------|-------------------------|
//! | `bem` | `nav` | `nav__link` |
//! | `atomic` | `sc-nav` | `sc-nav-link` |
//! | `semantic` | `nav` | `nav-link` |
//! | `abbreviated` | `nav` | `nav-lin` |
//! | `prefixed` | `sc-nav` | `sc-nav-link` |
//!
//! `bem` ignores the prefix entirely. `abbreviated` keeps the first three
//! characters of every dash-separated segment of the base, so
//! `game-card` becomes `gamcar`; distinct bases may collide and that is
//! accepted.
//!
//! Resolution is a pure function of its inputs. The generated stylesheet calls
//! the same resolver, so markup and selectors always agree.

use crate::theme::layout_axis;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

layout_axis! {
    NamingStyle {
        Bem => "bem",
        Atomic => "atomic",
        Semantic => "semantic",
        Abbreviated => "abbreviated",
        Prefixed => "prefixed",
    }
}

/// Short prefixes drawn for the `atomic` and `prefixed` styles.
pub const PREFIXES: &[&str] = &["sc", "casino", "game", "slot", "ui"];

const ABBREVIATION_LEN: usize = 3;

/// A naming style paired with the prefix it uses (if any).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConvention {
    pub style: NamingStyle,
    pub prefix: String,
}

impl NamingConvention {
    pub fn new(style: NamingStyle, prefix: impl Into<String>) -> Self {
        Self {
            style,
            prefix: prefix.into(),
        }
    }

    /// Draw a style and a prefix independently.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let style = NamingStyle::sample(rng);
        let prefix = PREFIXES[rng.random_range(0..PREFIXES.len())];
        Self::new(style, prefix)
    }

    /// Resolve a base token and optional modifier to a class name.
    ///
    /// An empty modifier is treated as absent. The result is never empty as
    /// long as `base` isn't.
    pub fn resolve(&self, base: &str, modifier: Option<&str>) -> String {
        let modifier = modifier.filter(|m| !m.is_empty());
        match self.style {
            NamingStyle::Bem => match modifier {
                Some(m) => format!("{base}__{m}"),
                None => base.to_string(),
            },
            NamingStyle::Atomic | NamingStyle::Prefixed => match modifier {
                Some(m) => format!("{}-{base}-{m}", self.prefix),
                None => format!("{}-{base}", self.prefix),
            },
            NamingStyle::Semantic => match modifier {
                Some(m) => format!("{base}-{m}"),
                None => base.to_string(),
            },
            NamingStyle::Abbreviated => {
                let mut abbreviated = abbreviate(base);
                if abbreviated.is_empty() {
                    abbreviated = base.to_string();
                }
                match modifier {
                    Some(m) => format!("{abbreviated}-{}", truncate(m)),
                    None => abbreviated,
                }
            }
            NamingStyle::Unrecognized => base.to_string(),
        }
    }

    /// Shorthand for `resolve(base, None)`.
    pub fn block(&self, base: &str) -> String {
        self.resolve(base, None)
    }

    /// Shorthand for `resolve(base, Some(modifier))`.
    pub fn element(&self, base: &str, modifier: &str) -> String {
        self.resolve(base, Some(modifier))
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            NamingStyle::Atomic | NamingStyle::Prefixed => {
                write!(f, "{} ({})", self.style, self.prefix)
            }
            _ => write!(f, "{}", self.style),
        }
    }
}

fn abbreviate(base: &str) -> String {
    base.split('-').map(truncate).collect()
}

fn truncate(segment: &str) -> &str {
    match segment.char_indices().nth(ABBREVIATION_LEN) {
        Some((idx, _)) => &segment[..idx],
        None => segment,
    }
}
