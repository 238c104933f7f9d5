//! Sample templates and per-tile spinner state.
//!
//! # Design
//! - The template list is static data; the gallery never fetches it.
//! - A tile's spinner is `None` when idle and is cleared only after `Done`.

/// Spinner size on a tile, in pixels.
pub const SPINNER_SIZE_PX: u32 = 50;
/// How long the finished spinner stays visible, in milliseconds.
pub const SPINNER_DONE_DURATION_MS: u32 = 1000;
/// Author shown on every tile until the backend reports one.
pub const DUMMY_AUTHOR: &str = "Nimbus Team";
/// Open count shown on every tile.
pub const DUMMY_OPEN_COUNT: u32 = 10;
/// Like count shown on every tile.
pub const DUMMY_LIKE_COUNT: u32 = 10;

/// A project template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    /// Display title.
    pub title: &'static str,
    /// Template identifier sent to `create_project`.
    pub id: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// CSS `background` value for the tile header.
    pub background: Option<&'static str>,
}

/// Every template offered by the gallery.
pub const SAMPLES: [Sample; 6] = [
    Sample {
        title: "Colorado COVID",
        id: "Colorado_COVID",
        description: "Learn to glue multiple spreadsheets to analyses all your data at once.",
        background: None,
    },
    Sample {
        title: "KMeans",
        id: "KMeans",
        description: "Learn where to open a coffee shop to maximize your income.",
        background: None,
    },
    Sample {
        title: "NASDAQ Returns",
        id: "NASDAQReturns",
        description: "Learn how to clean your data to prepare it for advanced analysis.",
        background: None,
    },
    Sample {
        title: "Combine spreadsheets",
        id: "Orders",
        description: "Glue multiple spreadsheets together to analyse all your data at once.",
        background: Some(
            "url('/assets/spreadsheets.svg') center / 50% no-repeat, rgba(255, 255, 255, 0.30)",
        ),
    },
    Sample {
        title: "Geospatial analysis",
        id: "Restaurants",
        description: "Learn where to open a coffee shop to maximize your income.",
        background: Some("url('/assets/geo.svg') 50% 20% / 100% no-repeat"),
    },
    Sample {
        title: "Analyze GitHub stars",
        id: "Stargazers",
        description: "Find out which of our repositories are most popular over time.",
        background: Some("url('/assets/visualize.png') center / cover"),
    },
];

/// Look up a template by id.
#[must_use]
pub fn sample(id: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|sample| sample.id == id)
}

/// Progress of a project creation started from a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinnerState {
    /// Clicked, nothing sent yet.
    Initial,
    /// Request in flight.
    Active,
    /// Finished; cleared after [`SPINNER_DONE_DURATION_MS`].
    Done,
}

impl SpinnerState {
    /// Animation classes for the spinner arc.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Initial => "dasharray-5 ease-linear",
            Self::Active => "dasharray-75 duration-90000 ease-linear",
            Self::Done => "dasharray-100 duration-1000 ease-in",
        }
    }
}

/// Which project a tile asks the caller to create.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateChoice {
    /// Empty project.
    Blank,
    /// Project from the template with this id.
    Template(&'static str),
}

impl TemplateChoice {
    /// Template id, `None` for a blank project.
    #[must_use]
    pub const fn template_id(self) -> Option<&'static str> {
        match self {
            Self::Blank => None,
            Self::Template(id) => Some(id),
        }
    }
}

/// Spinner shown on one tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TileSpinner {
    state: Option<SpinnerState>,
}

impl TileSpinner {
    /// Current state, `None` when idle.
    #[must_use]
    pub const fn state(self) -> Option<SpinnerState> {
        self.state
    }

    /// A click always restarts at [`SpinnerState::Initial`].
    #[must_use]
    pub const fn clicked(self) -> Self {
        Self {
            state: Some(SpinnerState::Initial),
        }
    }

    /// Apply a state reported by the caller. The flag tells whether a delayed
    /// clear must be scheduled.
    #[must_use]
    pub const fn reported(self, state: Option<SpinnerState>) -> (Self, bool) {
        (Self { state }, matches!(state, Some(SpinnerState::Done)))
    }

    /// Reset to idle.
    #[must_use]
    pub const fn cleared(self) -> Self {
        Self { state: None }
    }
}
