use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{CategoryAxis, SeriesGroup, ValueAxis, Viewport};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{
    BoxModel, BoxModelInputs, BoxSeriesConfig, ColorLookup, LabelFormatter,
    LocaleLabelFormatter, build_box_render_frame, recompute,
};

/// Interaction signal forwarded to listeners together with the current model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoxSeriesEvent {
    Select(BoxModel),
    Activate(BoxModel),
    Deactivate(BoxModel),
}

/// Observer for box interaction signals.
///
/// Listeners only receive events; they cannot reach into the series state.
pub trait BoxSeriesListener {
    fn on_event(&mut self, event: &BoxSeriesEvent);
}

/// One box series: configuration, the latest model and its listeners.
pub struct BoxSeries {
    config: BoxSeriesConfig,
    formatter: Box<dyn LabelFormatter>,
    model: Option<BoxModel>,
    listeners: Vec<Box<dyn BoxSeriesListener>>,
}

impl BoxSeries {
    pub fn new(config: BoxSeriesConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            formatter: Box::new(LocaleLabelFormatter::new(config.locale)),
            model: None,
            listeners: Vec::new(),
        })
    }

    /// Replaces the locale-based default label formatter.
    #[must_use]
    pub fn with_formatter(mut self, formatter: impl LabelFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    #[must_use]
    pub fn config(&self) -> BoxSeriesConfig {
        self.config
    }

    /// Latest model, `None` before the first update or when the group had
    /// nothing drawable.
    #[must_use]
    pub fn model(&self) -> Option<&BoxModel> {
        self.model.as_ref()
    }

    pub fn add_listener(&mut self, listener: Box<dyn BoxSeriesListener>) {
        self.listeners.push(listener);
    }

    /// Recomputes the model from scratch. The previous model is discarded
    /// before recomputation, so a failed update leaves no stale box behind.
    pub fn update(
        &mut self,
        group: &SeriesGroup,
        category_axis: &dyn CategoryAxis,
        value_axis: &dyn ValueAxis,
        colors: &dyn ColorLookup,
    ) -> ChartResult<Option<&BoxModel>> {
        self.model = None;
        let inputs = BoxModelInputs {
            group,
            category_axis,
            value_axis,
            colors,
            formatter: self.formatter.as_ref(),
            round_box_width: self.config.round_box_width,
        };
        self.model = recompute(inputs)?;
        Ok(self.model.as_ref())
    }

    /// Draws the current model. Returns `false` when there is nothing to draw.
    pub fn render<R: Renderer>(&self, renderer: &mut R, viewport: Viewport) -> ChartResult<bool> {
        let Some(model) = &self.model else {
            trace!("no box model to render");
            return Ok(false);
        };
        let frame = build_box_render_frame(model, viewport, &self.config);
        renderer.render(&frame)?;
        Ok(true)
    }

    pub fn select(&mut self) -> bool {
        self.emit(BoxSeriesEvent::Select)
    }

    pub fn activate(&mut self) -> bool {
        self.emit(BoxSeriesEvent::Activate)
    }

    pub fn deactivate(&mut self) -> bool {
        self.emit(BoxSeriesEvent::Deactivate)
    }

    fn emit(&mut self, make_event: fn(BoxModel) -> BoxSeriesEvent) -> bool {
        let Some(model) = &self.model else {
            return false;
        };
        let event = make_event(model.clone());
        debug!(
            group = %model.label,
            listeners = self.listeners.len(),
            "dispatch box series event"
        );
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
        true
    }
}
