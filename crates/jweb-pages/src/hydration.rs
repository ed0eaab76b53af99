//! Hydration data for server-rendered pages.
//!
//! A [`HydrationBundle`] carries everything the client runtime needs to
//! resume a page: the hydration JSON of the rendered tree, the current
//! state values, the session context id and the registered handler ids.
//! It is emitted as a single `<script type="application/json">` tag and
//! spliced into the document with [`inject_hydration_script`].

mod bundle;
mod inject;
mod state;

pub use bundle::{HydrationBundle, HydrationBundleBuilder};
pub use inject::inject_hydration_script;
pub use state::StateList;
