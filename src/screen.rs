//! The color screen: sliders, hex field, swatches, and the archive actions.
//!
//! All state lives in Floem signals created in whatever reactive scope the
//! screen is built in. Deferred archive completions go through the screen's
//! [`Lifetime`] so they are dropped once the screen is dismissed.

use std::cell::RefCell;
use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, Trigger};

use crate::archive::ColorArchive;
use crate::channel_slider::channel_slider;
use crate::channels::{derive_color, ChannelInputs, ColorSinks};
use crate::color::SolidColor;
use crate::config::PickerConfig;
use crate::constants;
use crate::hex::apply_hex;
use crate::inputs::{action_button, channel_readout, copy_button, hex_input};
use crate::lifetime::Lifetime;

type DismissHook = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

/// A single color picker screen.
///
/// Cheap to clone; clones drive the same screen.
#[derive(Clone)]
pub struct ColorScreen {
    channels: ChannelInputs,
    swatch: RwSignal<Option<SolidColor>>,
    hex_text: RwSignal<String>,
    saved_swatch: RwSignal<Option<SolidColor>>,
    selected: RwSignal<Option<SolidColor>>,
    end_editing: Trigger,
    archive: ColorArchive,
    lifetime: Lifetime,
    on_dismiss: DismissHook,
}

impl ColorScreen {
    /// A standalone screen with its own selection signal and lifetime.
    pub fn new(archive: ColorArchive, config: &PickerConfig) -> Self {
        Self::attach(archive, config, RwSignal::new(None), Lifetime::new())
    }

    /// A screen that reports Done on `selected` and is torn down with
    /// `lifetime`.
    ///
    /// Builds the derivation graph, seeds the sliders from
    /// `config.initial`, and starts the initial archive load, which only
    /// updates the saved swatch.
    pub fn attach(
        archive: ColorArchive,
        config: &PickerConfig,
        selected: RwSignal<Option<SolidColor>>,
        lifetime: Lifetime,
    ) -> Self {
        let channels = match config.initial {
            Some(color) => ChannelInputs::with_color(color),
            None => ChannelInputs::new(),
        };
        let swatch = RwSignal::new(None);
        let hex_text = RwSignal::new(String::new());
        derive_color(channels, ColorSinks { swatch, hex_text });

        let screen = Self {
            channels,
            swatch,
            hex_text,
            saved_swatch: RwSignal::new(None),
            selected,
            end_editing: Trigger::new(),
            archive,
            lifetime,
            on_dismiss: Rc::new(RefCell::new(None)),
        };
        screen.restore_saved();
        screen
    }

    /// Run `hook` when the screen is dismissed (Cancel or [`Self::dismiss`]).
    pub fn set_on_dismiss(&self, hook: impl FnOnce() + 'static) {
        *self.on_dismiss.borrow_mut() = Some(Box::new(hook));
    }

    pub fn channels(&self) -> ChannelInputs {
        self.channels
    }

    /// Latest derived color, `None` until every slider has reported.
    pub fn swatch(&self) -> RwSignal<Option<SolidColor>> {
        self.swatch
    }

    pub fn hex_text(&self) -> RwSignal<String> {
        self.hex_text
    }

    /// Color last confirmed by the archive.
    pub fn saved_swatch(&self) -> RwSignal<Option<SolidColor>> {
        self.saved_swatch
    }

    /// Set on every Done press.
    pub fn selected(&self) -> RwSignal<Option<SolidColor>> {
        self.selected
    }

    /// Fires when a successful Apply ends the text editing session.
    pub fn end_editing(&self) -> Trigger {
        self.end_editing
    }

    /// True once dismissed, or once the reactive scope holding the screen's
    /// signals has been disposed.
    pub fn is_dismissed(&self) -> bool {
        !self.is_live()
    }

    /// A disposed scope ends the lifetime, so anything still queued on the
    /// archive is dropped without touching the freed signals.
    fn is_live(&self) -> bool {
        if !self.lifetime.is_alive() {
            return false;
        }
        if self.swatch.try_get_untracked().is_none() {
            tracing::debug!("color screen scope disposed, ending its lifetime");
            self.lifetime.end();
            return false;
        }
        true
    }

    /// Apply button: push the hex text into the sliders.
    pub fn apply(&self) -> bool {
        if self.is_dismissed() {
            return false;
        }
        apply_hex(self.hex_text, self.channels, self.end_editing)
    }

    /// Save button: store the live swatch color; the saved swatch updates
    /// when the archive confirms.
    pub fn save(&self) {
        if self.is_dismissed() {
            return;
        }
        let Some(color) = self.swatch.get_untracked() else {
            tracing::debug!("nothing derived yet, skipping save");
            return;
        };
        let screen = self.clone();
        self.archive.save(
            color,
            self.lifetime.guard(move |saved: SolidColor| {
                if screen.is_live() {
                    screen.saved_swatch.set(Some(saved));
                }
            }),
        );
    }

    /// Load button: write the stored color into the hex field and apply it.
    pub fn load(&self) {
        if self.is_dismissed() {
            return;
        }
        let screen = self.clone();
        self.archive.load(self.lifetime.guard(move |loaded: Option<SolidColor>| {
            if !screen.is_live() {
                return;
            }
            let Some(color) = loaded else {
                tracing::debug!("archive empty, nothing to restore");
                return;
            };
            screen.hex_text.set(color.to_hex());
            screen.apply();
        }));
    }

    /// Done button: report the live swatch color.
    pub fn done(&self) {
        if self.is_dismissed() {
            return;
        }
        if let Some(color) = self.swatch.get_untracked() {
            tracing::debug!(color = %color, "color selected");
            self.selected.set(Some(color));
        }
    }

    /// Cancel button.
    pub fn cancel(&self) {
        self.dismiss();
    }

    /// End the screen's lifetime and run the dismiss hook. Idempotent.
    pub fn dismiss(&self) {
        if !self.lifetime.end() {
            return;
        }
        tracing::debug!("color screen dismissed");
        let hook = self.on_dismiss.borrow_mut().take();
        if let Some(hook) = hook {
            hook();
        }
    }

    fn restore_saved(&self) {
        let screen = self.clone();
        self.archive.load(self.lifetime.guard(move |loaded: Option<SolidColor>| {
            if !screen.is_live() {
                return;
            }
            if let Some(color) = loaded {
                screen.saved_swatch.set(Some(color));
            }
        }));
    }

    /// Build the view tree for this screen.
    pub fn view(&self) -> impl IntoView {
        let swatch = self.swatch;
        let saved_swatch = self.saved_swatch;
        let hex_text = self.hex_text;
        let channels = self.channels;

        let apply_screen = self.clone();
        let enter_screen = self.clone();
        let save_screen = self.clone();
        let load_screen = self.clone();
        let cancel_screen = self.clone();
        let done_screen = self.clone();

        v_stack((
            // Cancel / Done bar
            h_stack((
                action_button("Cancel", move || cancel_screen.cancel()),
                empty().style(|s| s.flex_grow(1.0)),
                action_button("Done", move || done_screen.done()),
            ))
            .style(|st| st.items_center()),
            // Live swatch
            empty().style(move |st| {
                let paint = swatch
                    .get()
                    .map(|c| c.to_paint())
                    .unwrap_or(Color::TRANSPARENT);
                st.width(constants::SWATCH_SIZE)
                    .height(constants::SWATCH_SIZE)
                    .align_self(Some(floem::taffy::AlignItems::Center))
                    .border_radius(constants::RADIUS)
                    .border(1.0)
                    .border_color(Color::rgb8(180, 180, 180))
                    .background(paint)
            }),
            // Hex + apply + copy row
            h_stack((
                hex_input(hex_text, self.end_editing, move || {
                    enter_screen.apply();
                }),
                action_button("Apply", move || {
                    apply_screen.apply();
                }),
                copy_button(move || hex_text.get_untracked()),
            ))
            .style(|st| st.gap(constants::GAP).items_center().justify_center()),
            // Channel sliders
            channel_row("R", channels.red, (1.0, 0.0, 0.0)),
            channel_row("G", channels.green, (0.0, 1.0, 0.0)),
            channel_row("B", channels.blue, (0.0, 0.0, 1.0)),
            // Saved color row
            h_stack((
                action_button("Save", move || save_screen.save()),
                action_button("Load", move || load_screen.load()),
                empty().style(|s| s.flex_grow(1.0)),
                empty().style(move |st| {
                    let paint = saved_swatch
                        .get()
                        .map(|c| c.to_paint())
                        .unwrap_or(Color::TRANSPARENT);
                    st.width(constants::SAVED_SWATCH_SIZE)
                        .height(constants::SAVED_SWATCH_SIZE)
                        .border_radius(constants::RADIUS)
                        .border(1.0)
                        .border_color(Color::rgb8(180, 180, 180))
                        .background(paint)
                }),
            ))
            .style(|st| st.gap(constants::GAP).items_center()),
        ))
        .style(|st| {
            st.gap(constants::GAP)
                .padding(constants::PADDING)
                .size_full()
                .background(Color::rgb8(242, 242, 242))
        })
    }
}

fn channel_row(
    lbl: &'static str,
    value: RwSignal<Option<f64>>,
    primary: (f64, f64, f64),
) -> impl IntoView {
    h_stack((
        label(move || lbl).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
                .width(12.0)
        }),
        channel_slider(value, primary).style(|s| s.flex_grow(1.0)),
        channel_readout(value),
    ))
    .style(|s| s.items_center().gap(4.0))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use floem::reactive::{create_effect, with_scope, Scope};

    use super::*;
    use crate::scheduler::ManualScheduler;

    const LATENCY: Duration = constants::ARCHIVE_LATENCY;

    fn setup(initial: Option<SolidColor>) -> (ColorScreen, ColorArchive, ManualScheduler) {
        let sched = ManualScheduler::new();
        let archive = ColorArchive::new(Rc::new(sched.clone()));
        let config = PickerConfig::default().initial(initial);
        (ColorScreen::new(archive.clone(), &config), archive, sched)
    }

    fn channel_bytes(screen: &ColorScreen) -> Option<(u8, u8, u8)> {
        screen.channels().combined().map(|c| c.to_rgb())
    }

    #[test]
    fn slider_hex_apply_scenario() {
        let (screen, _, _) = setup(None);
        let ch = screen.channels();
        ch.red.set(Some(1.0));
        ch.green.set(Some(0.0));
        ch.blue.set(Some(0.5));
        assert_eq!(screen.hex_text().get_untracked(), "FF0080");

        screen.hex_text().set("0000FF".to_string());
        assert!(screen.apply());
        assert_eq!(
            (ch.red.get_untracked(), ch.green.get_untracked(), ch.blue.get_untracked()),
            (Some(0.0), Some(0.0), Some(1.0))
        );
        assert_eq!(
            screen.swatch().get_untracked(),
            Some(SolidColor::from_rgb(0, 0, 255))
        );

        screen.hex_text().set("GGGGGG".to_string());
        assert!(!screen.apply());
        assert_eq!(channel_bytes(&screen), Some((0, 0, 255)));
        assert_eq!(
            screen.swatch().get_untracked(),
            Some(SolidColor::from_rgb(0, 0, 255))
        );
    }

    #[test]
    fn initial_load_on_empty_archive_changes_nothing() {
        let (screen, _, sched) = setup(Some(SolidColor::from_rgb(10, 20, 30)));
        assert_eq!(sched.pending(), 1);
        sched.advance(LATENCY);
        assert_eq!(screen.saved_swatch().get_untracked(), None);
        assert_eq!(screen.hex_text().get_untracked(), "0A141E");
    }

    #[test]
    fn initial_load_updates_only_saved_swatch() {
        let sched = ManualScheduler::new();
        let archive = ColorArchive::new(Rc::new(sched.clone()));
        let stored = SolidColor::from_rgb(200, 100, 50);
        archive.save(stored, |_| {});
        sched.advance(LATENCY);

        let config = PickerConfig::default().initial(Some(SolidColor::from_rgb(0, 0, 0)));
        let screen = ColorScreen::new(archive, &config);
        sched.advance(LATENCY);

        assert_eq!(screen.saved_swatch().get_untracked(), Some(stored));
        assert_eq!(screen.hex_text().get_untracked(), "000000");
        assert_eq!(channel_bytes(&screen), Some((0, 0, 0)));
    }

    #[test]
    fn save_updates_saved_swatch_after_latency() {
        let (screen, archive, sched) = setup(Some(SolidColor::from_rgb(0, 128, 255)));
        sched.advance(LATENCY);

        screen.save();
        assert_eq!(archive.stored(), Some(SolidColor::from_rgb(0, 128, 255)));
        assert_eq!(screen.saved_swatch().get_untracked(), None);

        sched.advance(LATENCY);
        assert_eq!(
            screen.saved_swatch().get_untracked(),
            Some(SolidColor::from_rgb(0, 128, 255))
        );
    }

    #[test]
    fn save_without_derived_color_is_skipped() {
        let (screen, archive, sched) = setup(None);
        sched.advance(LATENCY);
        screen.save();
        assert_eq!(sched.pending(), 0);
        assert_eq!(archive.stored(), None);
    }

    #[test]
    fn load_restores_through_hex_and_sliders() {
        let (screen, _, sched) = setup(Some(SolidColor::from_channels(0.2, 0.4, 0.5)));
        sched.advance(LATENCY);
        screen.save();
        sched.advance(LATENCY);

        screen.channels().set_rgb(255, 255, 255);
        assert_eq!(screen.hex_text().get_untracked(), "FFFFFF");

        let drops = Rc::new(std::cell::Cell::new(0));
        let d = drops.clone();
        let end_editing = screen.end_editing();
        create_effect(move |first: Option<()>| {
            end_editing.track();
            if first.is_some() {
                d.set(d.get() + 1);
            }
        });

        screen.load();
        assert_eq!(channel_bytes(&screen), Some((255, 255, 255)));
        sched.advance(LATENCY);

        assert_eq!(screen.hex_text().get_untracked(), "336680");
        assert_eq!(channel_bytes(&screen), Some((51, 102, 128)));
        assert_eq!(
            screen.swatch().get_untracked(),
            Some(SolidColor::from_rgb(51, 102, 128))
        );
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn load_from_empty_archive_is_a_no_op() {
        let (screen, _, sched) = setup(Some(SolidColor::from_rgb(1, 2, 3)));
        screen.load();
        sched.advance(LATENCY);
        assert_eq!(screen.hex_text().get_untracked(), "010203");
        assert_eq!(channel_bytes(&screen), Some((1, 2, 3)));
    }

    #[test]
    fn done_reports_current_swatch_each_time() {
        let (screen, _, _) = setup(Some(SolidColor::from_rgb(9, 8, 7)));
        let hits = Rc::new(RefCell::new(Vec::new()));
        let h = hits.clone();
        let selected = screen.selected();
        create_effect(move |first: Option<()>| {
            let c = selected.get();
            if first.is_some() {
                h.borrow_mut().push(c);
            }
        });

        screen.done();
        screen.channels().blue.set(Some(1.0));
        screen.done();
        assert_eq!(
            *hits.borrow(),
            vec![
                Some(SolidColor::from_rgb(9, 8, 7)),
                Some(SolidColor::from_channels(9.0 / 255.0, 8.0 / 255.0, 1.0)),
            ]
        );
    }

    #[test]
    fn done_before_any_color_is_ignored() {
        let (screen, _, _) = setup(None);
        screen.done();
        assert_eq!(screen.selected().get_untracked(), None);
    }

    #[test]
    fn cancel_runs_dismiss_hook_once() {
        let (screen, _, _) = setup(None);
        let calls = Rc::new(std::cell::Cell::new(0));
        let c = calls.clone();
        screen.set_on_dismiss(move || c.set(c.get() + 1));

        screen.cancel();
        screen.dismiss();
        assert!(screen.is_dismissed());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn completions_after_dismiss_are_dropped() {
        let (screen, archive, sched) = setup(Some(SolidColor::from_rgb(4, 5, 6)));
        screen.save();
        screen.load();
        screen.dismiss();
        sched.advance(LATENCY);

        assert_eq!(archive.stored(), Some(SolidColor::from_rgb(4, 5, 6)));
        assert_eq!(screen.saved_swatch().get_untracked(), None);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn disposed_scope_drops_in_flight_completions() {
        let sched = ManualScheduler::new();
        let archive = ColorArchive::new(Rc::new(sched.clone()));
        archive.save(SolidColor::from_rgb(200, 100, 50), |_| {});
        sched.advance(LATENCY);

        let scope = Scope::new();
        let screen = with_scope(scope, || {
            ColorScreen::new(archive.clone(), &PickerConfig::default())
        });
        screen.save();
        screen.load();
        assert_eq!(sched.pending(), 3);

        scope.dispose();
        sched.advance(LATENCY);

        assert!(screen.is_dismissed());
        assert_eq!(sched.pending(), 0);
        assert!(!screen.apply());
        screen.save();
        screen.load();
        screen.done();
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn actions_after_dismiss_do_nothing() {
        let (screen, archive, sched) = setup(Some(SolidColor::from_rgb(4, 5, 6)));
        screen.dismiss();
        sched.advance(LATENCY);

        screen.hex_text().set("FFFFFF".to_string());
        assert!(!screen.apply());
        screen.save();
        screen.load();
        screen.done();

        assert_eq!(sched.pending(), 0);
        assert_eq!(archive.stored(), None);
        assert_eq!(channel_bytes(&screen), Some((4, 5, 6)));
        assert_eq!(screen.selected().get_untracked(), None);
    }

    #[test]
    fn screens_with_separate_archives_are_isolated() {
        let (a, archive_a, sched_a) = setup(Some(SolidColor::from_rgb(1, 1, 1)));
        let (_b, archive_b, _) = setup(Some(SolidColor::from_rgb(2, 2, 2)));
        a.save();
        sched_a.advance(LATENCY);
        assert!(archive_a.stored().is_some());
        assert_eq!(archive_b.stored(), None);
    }
}
