//! Session facade tying geometry, interaction and extraction together.
//!
//! A [`Cutter`] owns one crop session: the validated configuration, the
//! source raster, the [`CropState`], the pointer state machine and the
//! settle model. Hosts forward pointer and button events to it and observe
//! the results through a [`CutterListener`].

use image::RgbaImage;

use crate::config::{ConfigError, CutterConfig};
use crate::decode::{decode_image, DecodeError};
use crate::encode::encode_png;
use crate::error::CutterError;
use crate::extract::extract;
use crate::geometry::{Point, Size};
use crate::interaction::{reconcile_crop_to_image, CropInteraction, Settle, SettleTicket};
use crate::layout::build_state;
use crate::render::RenderState;
use crate::scale::{rotate_image, zoom_in, zoom_out, StepOutcome};
use crate::state::CropState;

/// Lifecycle callbacks. Every method defaults to doing nothing.
pub trait CutterListener {
    /// Geometry or cursor changed and the view should be redrawn.
    fn on_render(&mut self, _render: &RenderState) {}

    /// A crop was extracted; `png` holds the encoded bytes.
    fn on_cut(&mut self, _png: &[u8]) {}

    /// A zoom-in step was applied.
    fn on_magnify(&mut self, _config: &CutterConfig) {}

    /// A zoom-out step was applied.
    fn on_reduce(&mut self, _config: &CutterConfig) {}
}

struct NoopListener;

impl CutterListener for NoopListener {}

pub struct Cutter {
    config: CutterConfig,
    source: RgbaImage,
    state: CropState,
    interaction: CropInteraction,
    settle: Settle,
    listener: Box<dyn CutterListener>,
}

impl Cutter {
    /// Start a session over an already decoded raster.
    pub fn new(config: CutterConfig, container: Size, source: RgbaImage) -> Result<Self, CutterError> {
        if let Err(err) = check_setup(&config, container, &source) {
            log::warn!("cutter setup failed: {err}");
            return Err(err);
        }

        let natural = Size::new(source.width() as f64, source.height() as f64);
        let state = build_state(&config, container, natural);
        let interaction = CropInteraction::new(config.can_change_cut_size);

        Ok(Self {
            config,
            source,
            state,
            interaction,
            settle: Settle::new(),
            listener: Box::new(NoopListener),
        })
    }

    /// Start a session from encoded image bytes.
    pub fn from_bytes(config: CutterConfig, container: Size, bytes: &[u8]) -> Result<Self, CutterError> {
        let source = decode_image(bytes).map_err(|err| {
            log::warn!("cutter asset failed to load: {err}");
            CutterError::from(err)
        })?;
        Self::new(config, container, source)
    }

    /// Attach a listener and emit the initial render.
    pub fn with_listener(mut self, listener: impl CutterListener + 'static) -> Self {
        self.set_listener(Box::new(listener));
        self
    }

    pub fn set_listener(&mut self, listener: Box<dyn CutterListener>) {
        self.listener = listener;
        self.render();
    }

    pub fn state(&self) -> &CropState {
        &self.state
    }

    pub fn config(&self) -> &CutterConfig {
        &self.config
    }

    pub fn interaction(&self) -> &CropInteraction {
        &self.interaction
    }

    pub fn cursor(&self) -> &'static str {
        self.interaction.cursor()
    }

    /// The configuration as it stands now: live zoom flags and the current
    /// crop size.
    pub fn current_config(&self) -> CutterConfig {
        CutterConfig {
            cut_width: self.state.cut.width,
            cut_height: self.state.cut.height,
            can_magnify: self.state.flags.can_magnify,
            can_reduce: self.state.flags.can_reduce,
            ..self.config.clone()
        }
    }

    pub fn render_state(&self) -> RenderState {
        RenderState::new(&self.state, self.interaction.zone(), self.settle.is_active())
    }

    fn render(&mut self) {
        let render = self.render_state();
        self.listener.on_render(&render);
    }

    pub fn set_container_origin(&mut self, origin: Point) {
        self.interaction.set_container_origin(origin);
    }

    pub fn pointer_enter(&mut self, client: Point) {
        self.interaction.pointer_enter(client, &self.state);
        self.render();
    }

    pub fn pointer_move(&mut self, client: Point) {
        self.interaction.pointer_move(client, &mut self.state);
        self.render();
    }

    /// Returns whether a drag started.
    pub fn pointer_down(&mut self, client: Point) -> bool {
        self.interaction.pointer_down(client)
    }

    pub fn pointer_up(&mut self, client: Point) -> Option<SettleTicket> {
        let ticket = self
            .interaction
            .pointer_up(client, &mut self.state, &mut self.settle);
        self.render();
        ticket
    }

    pub fn pointer_leave(&mut self) -> SettleTicket {
        let ticket = self.interaction.pointer_leave(&mut self.state, &mut self.settle);
        self.render();
        ticket
    }

    /// Zoom in one step.
    pub fn magnify(&mut self) -> StepOutcome {
        let outcome = zoom_in(&mut self.state);
        if outcome.is_applied() {
            self.settle_geometry();
            let config = self.current_config();
            self.listener.on_magnify(&config);
        }
        outcome
    }

    /// Zoom out one step.
    pub fn reduce(&mut self) -> StepOutcome {
        let outcome = zoom_out(&mut self.state);
        if outcome.is_applied() {
            self.settle_geometry();
            let config = self.current_config();
            self.listener.on_reduce(&config);
        }
        outcome
    }

    /// Rotate a quarter turn counter-clockwise.
    pub fn rotate(&mut self) -> StepOutcome {
        if !self.config.can_rotate {
            log::debug!("rotate rejected: rotation disabled");
            return StepOutcome::Rejected;
        }
        rotate_image(&mut self.state);
        self.settle_geometry();
        StepOutcome::Applied
    }

    fn settle_geometry(&mut self) {
        reconcile_crop_to_image(&mut self.state, &mut self.settle);
        self.render();
    }

    /// Ticket of the settle transition still waiting for its timer.
    pub fn settle_ticket(&self) -> Option<SettleTicket> {
        self.settle.pending()
    }

    pub fn settle_generation(&self) -> u64 {
        self.settle.generation()
    }

    /// Called by the host when a settle timer fires.
    pub fn finish_settle(&mut self, ticket: SettleTicket) -> bool {
        let cleared = self.settle.finish(ticket);
        if cleared {
            self.render();
        }
        cleared
    }

    /// Extract the crop rectangle and encode it as PNG.
    pub fn cut_image(&mut self) -> Result<Vec<u8>, CutterError> {
        let cropped = extract(&self.state, &self.source);
        let png = encode_png(&cropped)?;
        log::debug!(
            "cut: {}x{} from {:?}",
            cropped.width(),
            cropped.height(),
            self.state.cut
        );
        self.listener.on_cut(&png);
        Ok(png)
    }
}

fn check_setup(config: &CutterConfig, container: Size, source: &RgbaImage) -> Result<(), CutterError> {
    config.validate()?;
    if !container.is_positive() {
        return Err(ConfigError::Invalid(vec![
            "container width and height must be positive".to_string(),
        ])
        .into());
    }
    if source.width() == 0 || source.height() == 0 {
        return Err(DecodeError::EmptyImage.into());
    }
    Ok(())
}
