//! JSON scenarios: a viewport, a container and seeded elements, run through
//! the positioner with in-memory elements.
//!
//! ```json
//! {
//!   "viewport": { "top": 0, "bottom": 800 },
//!   "container": { "top": -500, "bottom": 500 },
//!   "top": [{ "name": "header", "natural": { "top": -500, "bottom": -460 } }],
//!   "bottom": [],
//!   "options": { "default_offset": 0 }
//! }
//! ```

use crate::context::StickySpec;
use crate::element::{MemoryElement, StickyElement};
use crate::plan::compute_sticky_positions;
use crate::{LOG_TARGET, StickyOptions};
use anyhow::{Context as _, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::Path;
use sticky_geometry::{Rect, Relation};

/// One element of a scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementSeed {
    #[serde(default)]
    pub name: Option<String>,
    /// Rectangle with no inline offset applied.
    pub natural: Rect,
    /// Initial inline `style` attribute.
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub offset: Option<f64>,
}

impl ElementSeed {
    fn build(&self) -> MemoryElement {
        MemoryElement::with_style(self.natural, &self.style)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub viewport: Rect,
    pub container: Rect,
    #[serde(default)]
    pub top: Vec<ElementSeed>,
    #[serde(default)]
    pub bottom: Vec<ElementSeed>,
    #[serde(default)]
    pub options: StickyOptions,
}

/// State of one element after a scenario run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Inline style attribute after the last pass.
    pub style: String,
    /// Measured rectangle after the last pass.
    pub rect: Rect,
}

impl ElementReport {
    fn new(seed: &ElementSeed, element: &MemoryElement) -> Self {
        Self {
            name: seed.name.clone(),
            style: element.style().to_string(),
            rect: element.bounding_rect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Relation seen by the last pass; `None` when the positioner did nothing.
    pub relation: Option<Relation>,
    pub passes: usize,
    pub top: Vec<ElementReport>,
    pub bottom: Vec<ElementReport>,
}

impl Scenario {
    /// # Errors
    /// Returns an error if `text` is not a valid scenario document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(text).context("parsing sticky scenario")?;
        scenario.options.validate()?;
        Ok(scenario)
    }

    /// # Errors
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = read_to_string(path)
            .with_context(|| format!("reading sticky scenario from {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Build the scenario's elements in their initial state.
    pub fn elements(&self) -> (Vec<MemoryElement>, Vec<MemoryElement>) {
        (
            self.top.iter().map(ElementSeed::build).collect(),
            self.bottom.iter().map(ElementSeed::build).collect(),
        )
    }

    /// Run the positioner `passes` times (at least once) over fresh elements.
    pub fn run(&self, passes: usize) -> ScenarioReport {
        let (mut top_elements, mut bottom_elements) = self.elements();
        let passes = passes.max(1);
        let mut relation = None;
        for pass in 0..passes {
            let mut top = specs(&self.top, &mut top_elements);
            let mut bottom = specs(&self.bottom, &mut bottom_elements);
            relation = compute_sticky_positions(
                self.viewport,
                self.container,
                &mut top,
                &mut bottom,
                &self.options,
            )
            .map(|plan| plan.relation);
            debug!(target: LOG_TARGET, "scenario pass {pass}: {relation:?}");
        }
        ScenarioReport {
            relation,
            passes,
            top: reports(&self.top, &top_elements),
            bottom: reports(&self.bottom, &bottom_elements),
        }
    }
}

fn specs<'el>(
    seeds: &[ElementSeed],
    elements: &'el mut [MemoryElement],
) -> Vec<StickySpec<'el, MemoryElement>> {
    seeds
        .iter()
        .zip(elements.iter_mut())
        .map(|(seed, element)| StickySpec {
            element,
            offset: seed.offset,
        })
        .collect()
}

fn reports(seeds: &[ElementSeed], elements: &[MemoryElement]) -> Vec<ElementReport> {
    seeds
        .iter()
        .zip(elements)
        .map(|(seed, element)| ElementReport::new(seed, element))
        .collect()
}
