//! Modal dialog with a fluent configuration surface
//!
//! A [`Dialog`] owns its view tree for its whole lifetime and is configured
//! through chained calls, then shown:
//!
//! ```rust
//! use std::rc::Rc;
//! use scrim_core::{Context, ResourceTable};
//! use scrim_dialog::dialog;
//!
//! let ctx = Context::new(Rc::new(ResourceTable::new()));
//! let shown = dialog(ctx)
//!     .title(None, Some("Delete file?"))
//!     .message(None, Some("This cannot be undone."))
//!     .positive_button(None, Some("Delete"), None)
//!     .negative_button(None, None, None) // standard "Cancel"
//!     .show();
//! assert!(shown.auto_dismiss());
//! ```
//!
//! Configuration parameters that accept "a resource id or a literal" follow
//! one contract everywhere: the literal wins when both are given, and
//! supplying neither is a fatal configuration error unless the parameter
//! has a platform-standard fallback (positive/negative button labels).

use std::rc::Rc;

use scrim_core::{Context, DialogError, Drawable, DrawableId, StringId};
use scrim_theme::{ColorScheme, ThemeTokens};
use scrim_view::{inflate, Slot, TemplateId, ViewId, ViewTree};

use crate::action::ActionButton;

/// Callback invoked with the dialog on lifecycle transitions and button
/// activation. `Rc` because all dialog work happens on the UI thread.
pub type DialogCallback = Rc<dyn Fn(&mut Dialog)>;

/// Wrap a closure as a [`DialogCallback`]
pub fn callback(f: impl Fn(&mut Dialog) + 'static) -> DialogCallback {
    Rc::new(f)
}

/// Dialog lifecycle states
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogState {
    /// Created, accepting configuration calls
    Configuring,
    /// Displayed by the platform
    Shown,
    /// Torn down normally
    Dismissed,
    /// Torn down by a cancel gesture
    Cancelled,
}

/// A themed modal dialog
///
/// Created against a host [`Context`]; the color scheme is inferred once at
/// construction and never changes. All configuration methods consume and
/// return `self` for chaining and mutate the owned view tree in place.
pub struct Dialog {
    context: Context,
    scheme: ColorScheme,
    tokens: ThemeTokens,
    tree: ViewTree,
    root: ViewId,
    state: DialogState,
    auto_dismiss: bool,
    content_scroll: Option<ViewId>,
    message_view: Option<ViewId>,
    show_listener: Option<DialogCallback>,
    dismiss_listener: Option<DialogCallback>,
    cancel_listener: Option<DialogCallback>,
    actions: [Option<DialogCallback>; 3],
}

/// Create a new dialog against the given host context
pub fn dialog(context: Context) -> Dialog {
    Dialog::new(context)
}

impl Dialog {
    /// Create a dialog: infer the scheme, inflate the base chrome, apply
    /// theme tokens
    pub fn new(context: Context) -> Self {
        let scheme = ColorScheme::infer(&context);
        let tokens = scheme.tokens();

        let mut tree = ViewTree::new();
        let root = inflate(&mut tree, &context, TemplateId::DialogBase, None);

        let mut dialog = Self {
            context,
            scheme,
            tokens,
            tree,
            root,
            state: DialogState::Configuring,
            auto_dismiss: true,
            content_scroll: None,
            message_view: None,
            show_listener: None,
            dismiss_listener: None,
            cancel_listener: None,
            actions: [None, None, None],
        };
        dialog.apply_theme();
        dialog
    }

    fn apply_theme(&mut self) {
        let surface = self.tokens.surface;
        let text = self.tokens.text_primary;
        let accent = self.tokens.accent;

        self.tree.set_color(self.root, surface);
        let title = self.slot(Slot::Title);
        self.tree.set_color(title, text);
        for button in ActionButton::ALL {
            let slot = self.slot(button.slot());
            self.tree.set_color(slot, accent);
        }
    }

    /// Look up a template slot. The base template always carries every
    /// slot, so a miss is a template bug, not a caller error.
    fn slot(&self, slot: Slot) -> ViewId {
        self.tree
            .find_slot(self.root, slot)
            .unwrap_or_else(|| panic!("dialog template missing slot {slot:?}"))
    }

    /// Resolve a "resource id or literal" text pair: literal wins, then the
    /// resource id, then the fallback. Nothing set is a fatal configuration
    /// error. Every text-accepting setter funnels through here.
    fn resolve_label(
        &self,
        res: Option<StringId>,
        text: Option<&str>,
        fallback: Option<String>,
    ) -> String {
        match (text, res, fallback) {
            (Some(text), _, _) => text.to_string(),
            (None, Some(id), _) => self.context.string(id),
            (None, None, Some(label)) => label,
            (None, None, None) => panic!("{}", DialogError::MissingRequiredInput),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the title-area icon from a drawable resource or a literal
    /// drawable (literal wins)
    pub fn icon(mut self, res: Option<DrawableId>, icon: Option<Drawable>) -> Self {
        let drawable = match (icon, res) {
            (Some(drawable), _) => drawable,
            (None, Some(id)) => self.context.drawable(id),
            (None, None) => panic!("{}", DialogError::MissingRequiredInput),
        };
        let slot = self.slot(Slot::Icon);
        self.tree.set_icon(slot, drawable);
        self.tree.set_visible(slot, true);
        self
    }

    /// Set the title text from a string resource or a literal (literal wins)
    pub fn title(mut self, res: Option<StringId>, text: Option<&str>) -> Self {
        let text = self.resolve_label(res, text, None);
        let slot = self.slot(Slot::Title);
        self.tree.set_text(slot, text);
        self
    }

    /// Set the body message from a string resource or a literal
    ///
    /// The scrollable content frame and the message label are created on
    /// first use and reused afterwards; repeated calls only replace the
    /// text.
    pub fn message(mut self, res: Option<StringId>, text: Option<&str>) -> Self {
        let text = self.resolve_label(res, text, None);
        let view = self.add_content_message_view();
        self.tree.set_text(view, text);
        self
    }

    fn add_content_scroll_view(&mut self) -> ViewId {
        if let Some(id) = self.content_scroll {
            return id;
        }
        let content = self.slot(Slot::Content);
        let scroll = inflate(
            &mut self.tree,
            &self.context,
            TemplateId::ContentScrollView,
            Some(content),
        );
        self.content_scroll = Some(scroll);
        scroll
    }

    fn add_content_message_view(&mut self) -> ViewId {
        if let Some(id) = self.message_view {
            return id;
        }
        let scroll = self.add_content_scroll_view();
        let message = inflate(
            &mut self.tree,
            &self.context,
            TemplateId::MessageLabel,
            Some(scroll),
        );
        self.tree.set_color(message, self.tokens.text_secondary);
        self.message_view = Some(message);
        message
    }

    /// Configure the affirmative button; with no text source it takes the
    /// platform-standard "OK" label
    pub fn positive_button(
        self,
        res: Option<StringId>,
        text: Option<&str>,
        click: Option<DialogCallback>,
    ) -> Self {
        self.action_button(ActionButton::Positive, res, text, click)
    }

    /// Configure the dismissive button; with no text source it takes the
    /// platform-standard "Cancel" label
    pub fn negative_button(
        self,
        res: Option<StringId>,
        text: Option<&str>,
        click: Option<DialogCallback>,
    ) -> Self {
        self.action_button(ActionButton::Negative, res, text, click)
    }

    /// Configure the neutral button; a text source is mandatory (there is
    /// no standard neutral label)
    pub fn neutral_button(
        self,
        res: Option<StringId>,
        text: Option<&str>,
        click: Option<DialogCallback>,
    ) -> Self {
        self.action_button(ActionButton::Neutral, res, text, click)
    }

    fn action_button(
        mut self,
        which: ActionButton,
        res: Option<StringId>,
        text: Option<&str>,
        click: Option<DialogCallback>,
    ) -> Self {
        let fallback = which.fallback_label(self.context.resources().as_ref());
        let label = self.resolve_label(res, text, fallback);
        let slot = self.slot(which.slot());
        self.tree.set_text(slot, label);
        self.tree.set_visible(slot, true);
        self.actions[which.index()] = click;
        self
    }

    /// Keep the dialog open across button activations. One-way: the flag
    /// never reverts to automatic dismissal.
    pub fn no_auto_dismiss(mut self) -> Self {
        self.auto_dismiss = false;
        self
    }

    /// Toggle diagnostic bounds visualization on the view tree
    pub fn debug_mode(mut self, enabled: bool) -> Self {
        self.tree.set_debug(enabled);
        self
    }

    /// Register the show callback; replaces any previous registration
    pub fn on_show(mut self, callback: impl Fn(&mut Dialog) + 'static) -> Self {
        self.show_listener = Some(Rc::new(callback));
        self
    }

    /// Register the dismiss callback; replaces any previous registration
    pub fn on_dismiss(mut self, callback: impl Fn(&mut Dialog) + 'static) -> Self {
        self.dismiss_listener = Some(Rc::new(callback));
        self
    }

    /// Register the cancel callback; replaces any previous registration
    pub fn on_cancel(mut self, callback: impl Fn(&mut Dialog) + 'static) -> Self {
        self.cancel_listener = Some(Rc::new(callback));
        self
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Terminal operation: display the dialog and fire the show callback.
    /// Showing an already-shown or torn-down dialog is a no-op.
    pub fn show(mut self) -> Self {
        if self.state != DialogState::Configuring {
            tracing::debug!(state = ?self.state, "show ignored");
            return self;
        }
        self.state = DialogState::Shown;
        tracing::debug!(scheme = ?self.scheme, "dialog shown");
        if let Some(cb) = self.show_listener.clone() {
            cb(&mut self);
        }
        self
    }

    /// Run a final configuration block, then show
    pub fn show_with(self, configure: impl FnOnce(Self) -> Self) -> Self {
        configure(self).show()
    }

    /// Platform-driven button activation: runs the registered callback,
    /// then dismisses unless auto-dismiss was disabled
    pub fn press(&mut self, button: ActionButton) {
        if self.state != DialogState::Shown {
            tracing::debug!(?button, state = ?self.state, "press ignored");
            return;
        }
        tracing::debug!(?button, "action activated");
        if let Some(cb) = self.actions[button.index()].clone() {
            cb(self);
        }
        if self.auto_dismiss {
            self.dismiss();
        }
    }

    /// Platform-driven teardown; fires the dismiss callback once
    pub fn dismiss(&mut self) {
        if self.state != DialogState::Shown {
            tracing::debug!(state = ?self.state, "dismiss ignored");
            return;
        }
        self.state = DialogState::Dismissed;
        tracing::debug!("dialog dismissed");
        if let Some(cb) = self.dismiss_listener.clone() {
            cb(self);
        }
    }

    /// Platform-driven cancel gesture; fires the cancel callback, then the
    /// dismiss callback (cancellation implies dismissal)
    pub fn cancel(&mut self) {
        if self.state != DialogState::Shown {
            tracing::debug!(state = ?self.state, "cancel ignored");
            return;
        }
        self.state = DialogState::Cancelled;
        tracing::debug!("dialog cancelled");
        if let Some(cb) = self.cancel_listener.clone() {
            cb(self);
        }
        if let Some(cb) = self.dismiss_listener.clone() {
            cb(self);
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Whether button activation closes the dialog
    pub fn auto_dismiss(&self) -> bool {
        self.auto_dismiss
    }

    /// The color scheme resolved at construction
    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    /// The dialog's view tree, for slot inspection
    pub fn view(&self) -> &ViewTree {
        &self.tree
    }

    pub fn title_text(&self) -> Option<&str> {
        self.tree.text(self.slot(Slot::Title))
    }

    pub fn message_text(&self) -> Option<&str> {
        self.message_view.and_then(|id| self.tree.text(id))
    }

    pub fn button_text(&self, button: ActionButton) -> Option<&str> {
        self.tree.text(self.slot(button.slot()))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use scrim_core::{Color, ColorAttr, ResourceTable};

    use super::*;

    const TITLE: StringId = StringId(0x10);
    const BODY: StringId = StringId(0x11);
    const ICON: DrawableId = DrawableId(0x20);

    fn test_context() -> Context {
        let resources = ResourceTable::new()
            .with_string(TITLE, "From resources")
            .with_string(BODY, "Resource body")
            .with_drawable(ICON, Drawable::from_svg("<circle r=\"4\"/>"));
        Context::new(Rc::new(resources))
    }

    #[test]
    fn test_title_literal_wins_over_resource() {
        let d = dialog(test_context()).title(Some(TITLE), Some("Literal"));
        assert_eq!(d.title_text(), Some("Literal"));
    }

    #[test]
    fn test_title_from_resource() {
        let d = dialog(test_context()).title(Some(TITLE), None);
        assert_eq!(d.title_text(), Some("From resources"));
    }

    #[test]
    #[should_panic(expected = "You must specify a resource ID or literal value.")]
    fn test_title_requires_a_source() {
        let _ = dialog(test_context()).title(None, None);
    }

    #[test]
    #[should_panic(expected = "You must specify a resource ID or literal value.")]
    fn test_icon_requires_a_source() {
        let _ = dialog(test_context()).icon(None, None);
    }

    #[test]
    fn test_icon_literal_wins() {
        let literal = Drawable::from_svg("<rect/>");
        let d = dialog(test_context()).icon(Some(ICON), Some(literal.clone()));
        let slot = d.view().find_slot(d.view().root().unwrap(), Slot::Icon).unwrap();
        assert_eq!(d.view().icon(slot), Some(&literal));
        assert!(d.view().is_visible(slot));
    }

    #[test]
    fn test_positive_and_negative_fall_back_to_standard_labels() {
        let d = dialog(test_context())
            .positive_button(None, None, None)
            .negative_button(None, None, None);
        assert_eq!(d.button_text(ActionButton::Positive), Some("OK"));
        assert_eq!(d.button_text(ActionButton::Negative), Some("Cancel"));
    }

    #[test]
    fn test_button_literal_wins_over_resource() {
        let d = dialog(test_context()).positive_button(Some(TITLE), Some("Yes"), None);
        assert_eq!(d.button_text(ActionButton::Positive), Some("Yes"));
    }

    #[test]
    #[should_panic(expected = "You must specify a resource ID or literal value.")]
    fn test_neutral_has_no_fallback() {
        let _ = dialog(test_context()).neutral_button(None, None, None);
    }

    #[test]
    #[should_panic(expected = "You must specify a resource ID or literal value.")]
    fn test_message_requires_a_source() {
        let _ = dialog(test_context()).message(None, None);
    }

    #[test]
    fn test_message_view_is_memoized() {
        let d = dialog(test_context())
            .message(None, Some("first"))
            .message(None, Some("second"));
        let root = d.view().root().unwrap();
        assert_eq!(d.view().count_slot(root, Slot::Message), 1);
        assert_eq!(d.view().count_slot(root, Slot::ScrollFrame), 1);
        assert_eq!(d.message_text(), Some("second"));
    }

    #[test]
    fn test_auto_dismiss_defaults_true_and_flips_once() {
        let d = dialog(test_context());
        assert!(d.auto_dismiss());
        let d = d.no_auto_dismiss();
        assert!(!d.auto_dismiss());
    }

    #[test]
    fn test_debug_mode_sets_tree_flag() {
        let d = dialog(test_context()).debug_mode(true);
        assert!(d.view().debug());
    }

    #[test]
    fn test_last_registered_dismiss_listener_wins() {
        let fired = Rc::new(Cell::new(0));
        let (first, second) = (fired.clone(), fired.clone());
        let mut d = dialog(test_context())
            .on_dismiss(move |_| first.set(1))
            .on_dismiss(move |_| second.set(2))
            .show();
        d.dismiss();
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_show_fires_listener_and_transitions() {
        let shown = Rc::new(Cell::new(false));
        let flag = shown.clone();
        let d = dialog(test_context()).on_show(move |_| flag.set(true)).show();
        assert!(shown.get());
        assert_eq!(d.state(), DialogState::Shown);
    }

    #[test]
    fn test_show_is_idempotent_once_shown() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let d = dialog(test_context())
            .on_show(move |_| counter.set(counter.get() + 1))
            .show()
            .show();
        assert_eq!(count.get(), 1);
        assert_eq!(d.state(), DialogState::Shown);
    }

    #[test]
    fn test_show_with_applies_configuration_block() {
        let d = dialog(test_context()).show_with(|d| d.title(None, Some("Inline")));
        assert_eq!(d.title_text(), Some("Inline"));
        assert_eq!(d.state(), DialogState::Shown);
    }

    #[test]
    fn test_press_runs_callback_then_auto_dismisses() {
        let clicked = Rc::new(Cell::new(false));
        let flag = clicked.clone();
        let mut d = dialog(test_context())
            .positive_button(None, None, Some(callback(move |_| flag.set(true))))
            .show();
        d.press(ActionButton::Positive);
        assert!(clicked.get());
        assert_eq!(d.state(), DialogState::Dismissed);
    }

    #[test]
    fn test_press_without_auto_dismiss_keeps_dialog_shown() {
        let mut d = dialog(test_context())
            .positive_button(None, None, None)
            .no_auto_dismiss()
            .show();
        d.press(ActionButton::Positive);
        assert_eq!(d.state(), DialogState::Shown);
    }

    #[test]
    fn test_cancel_fires_cancel_then_dismiss() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let (cancelled, dismissed) = (order.clone(), order.clone());
        let mut d = dialog(test_context())
            .on_cancel(move |_| cancelled.borrow_mut().push("cancel"))
            .on_dismiss(move |_| dismissed.borrow_mut().push("dismiss"))
            .show();
        d.cancel();
        assert_eq!(*order.borrow(), vec!["cancel", "dismiss"]);
        assert_eq!(d.state(), DialogState::Cancelled);
    }

    #[test]
    fn test_teardown_callbacks_fire_at_most_once() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let mut d = dialog(test_context())
            .on_dismiss(move |_| counter.set(counter.get() + 1))
            .show();
        d.dismiss();
        d.dismiss();
        d.cancel();
        assert_eq!(count.get(), 1);
        assert_eq!(d.state(), DialogState::Dismissed);
    }

    #[test]
    fn test_scheme_inferred_from_host_text_color() {
        let dark_host = Context::new(Rc::new(ResourceTable::new()))
            .with_color(ColorAttr::TextPrimary, Color::WHITE);
        assert_eq!(dialog(dark_host).scheme(), ColorScheme::Dark);

        let light_host = Context::new(Rc::new(ResourceTable::new()))
            .with_color(ColorAttr::TextPrimary, Color::BLACK);
        assert_eq!(dialog(light_host).scheme(), ColorScheme::Light);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let d = dialog(test_context())
            .title(None, Some("Hello"))
            .message(None, Some("World"))
            .positive_button(None, None, None)
            .show();

        assert_eq!(d.title_text(), Some("Hello"));
        assert_eq!(d.message_text(), Some("World"));
        assert_eq!(d.button_text(ActionButton::Positive), Some("OK"));
        assert_eq!(d.state(), DialogState::Shown);
        assert!(d.auto_dismiss());
    }
}
