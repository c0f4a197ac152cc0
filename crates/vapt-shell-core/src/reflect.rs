//! Keeps the shell chrome (body classes, sidebar, user labels, theme
//! toggle) in line with the shared [`UiState`](crate::state::UiState).

use std::rc::Rc;

use crate::context::ShellContext;
use crate::document::ShellDocument;
use crate::router::RenderReport;
use crate::state::Theme;

pub const PROJECT_ROUTE: &str = "/project";

pub fn apply_role_display<D: ShellDocument + ?Sized>(context: &ShellContext, document: &D) {
    let config = context.config();
    let (is_admin, name, role) = context.with_state(|state| {
        (
            state.is_admin(&config.admin_role),
            state.user.name.clone(),
            state.user.role.clone(),
        )
    });
    document.set_body_class(&config.analyst_body_class, !is_admin);
    document.set_text_by_class(&config.user_name_class, &name);
    document.set_text_by_class(&config.user_role_class, &role);
}

pub fn apply_theme_display<D: ShellDocument + ?Sized>(context: &ShellContext, document: &D) {
    let config = context.config();
    let theme = context.update_state(|state| state.ensure_theme());
    document.set_body_class(&config.light_theme_body_class, theme == Theme::Light);
    document.set_checked(&config.theme_toggle_id, theme.is_dark());
}

/// Collapses the sidebar unless it already is. Returns whether one exists.
pub fn collapse_sidebar<D: ShellDocument + ?Sized>(context: &ShellContext, document: &D) -> bool {
    let config = context.config();
    match document.element_has_class(&config.sidebar_id, &config.collapsed_class) {
        Some(true) => true,
        Some(false) => {
            document.set_element_class(&config.sidebar_id, &config.collapsed_class, true)
        }
        None => false,
    }
}

/// Flips the sidebar's collapsed state; `None` when there is no sidebar.
pub fn toggle_sidebar<D: ShellDocument + ?Sized>(
    context: &ShellContext,
    document: &D,
) -> Option<bool> {
    let config = context.config();
    let collapsed = !document.element_has_class(&config.sidebar_id, &config.collapsed_class)?;
    document.set_element_class(&config.sidebar_id, &config.collapsed_class, collapsed);
    Some(collapsed)
}

/// Routes the theme checkbox, when the current page has one, into the
/// state record.
pub fn wire_theme_toggle<D: ShellDocument + 'static>(
    context: &Rc<ShellContext>,
    document: &Rc<D>,
) -> bool {
    let toggle_id = context.config().theme_toggle_id.clone();
    if !document.has_element(&toggle_id) {
        return false;
    }
    let context = Rc::downgrade(context);
    let weak_document = Rc::downgrade(document);
    document.bind_checkbox_change(
        &toggle_id,
        Rc::new(move |checked| {
            let (Some(context), Some(document)) = (context.upgrade(), weak_document.upgrade())
            else {
                return;
            };
            let theme = Theme::from_dark_mode(checked);
            context.update_state(|state| state.theme = Some(theme));
            tracing::debug!(?theme, "theme toggled");
            apply_theme_display(&context, &*document);
        }),
    )
}

/// First paint, before any fragment has loaded.
pub fn initial_paint<D: ShellDocument + ?Sized>(context: &ShellContext, document: &D) {
    apply_role_display(context, document);
    apply_theme_display(context, document);
}

pub fn reflect_after_render<D: ShellDocument + 'static>(
    context: &Rc<ShellContext>,
    document: &Rc<D>,
) {
    apply_role_display(context, &**document);
    apply_theme_display(context, &**document);
    collapse_sidebar(context, &**document);
    wire_theme_toggle(context, document);
}

/// Console helper: swap the active role and repaint the role chrome.
pub fn switch_role<D: ShellDocument + ?Sized>(context: &ShellContext, document: &D, role: &str) {
    let admin_role = context.config().admin_role.clone();
    context.update_state(|state| state.switch_role(role, &admin_role));
    apply_role_display(context, document);
    tracing::info!(role, "role switched");
}

/// Post-render hook repainting the chrome after every render.
pub fn reflector_hook<D: ShellDocument + 'static>(
    context: Rc<ShellContext>,
    document: Rc<D>,
) -> impl Fn(&RenderReport) + 'static {
    move |_report| reflect_after_render(&context, &document)
}

/// Post-render hook tracking the project shown by `#/project?id=...`.
pub fn route_context_hook(context: Rc<ShellContext>) -> impl Fn(&RenderReport) + 'static {
    move |report| {
        let Some(route) = report.route.as_ref() else {
            return;
        };
        if route.path != PROJECT_ROUTE {
            return;
        }
        if let Some(project_id) = route.param("id").filter(|id| !id.is_empty()) {
            context.update_state(|state| state.current_project = Some(project_id.to_string()));
        }
    }
}
