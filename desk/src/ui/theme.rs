//! # GUI Theme
//!
//! Light marketplace theme: white panels, blue accent, status colours for the
//! request and offer badges.

use egui::{Color32, Context, Stroke, Visuals};
use shared::dto::{OfferStatus, RequestStatus};

/// Colour palette
#[derive(Clone)]
pub struct DeskColors {
    /// Page background
    pub background: Color32,
    /// Card and window fill
    pub surface: Color32,
    /// Body text
    pub text: Color32,
    /// Primary accent (buttons, active tab)
    pub blue_primary: Color32,
    /// Hover fill
    pub blue_light: Color32,
    pub border: Color32,
    pub green_success: Color32,
    pub red_error: Color32,
    pub orange_warning: Color32,
    pub cyan_info: Color32,
    /// Secondary text
    pub gray_secondary: Color32,
}

impl Default for DeskColors {
    fn default() -> Self {
        DeskColors {
            background: Color32::from_rgb(243, 244, 246),     // #F3F4F6
            surface: Color32::from_rgb(255, 255, 255),        // #FFFFFF
            text: Color32::from_rgb(17, 24, 39),              // #111827
            blue_primary: Color32::from_rgb(37, 99, 235),     // #2563EB
            blue_light: Color32::from_rgb(219, 234, 254),     // #DBEAFE
            border: Color32::from_rgb(209, 213, 219),         // #D1D5DB
            green_success: Color32::from_rgb(22, 163, 74),    // #16A34A
            red_error: Color32::from_rgb(220, 38, 38),        // #DC2626
            orange_warning: Color32::from_rgb(217, 119, 6),   // #D97706
            cyan_info: Color32::from_rgb(8, 145, 178),        // #0891B2
            gray_secondary: Color32::from_rgb(107, 114, 128), // #6B7280
        }
    }
}

/// Application theme
pub struct Theme {
    pub colors: DeskColors,
    /// Normal text color
    pub normal: Color32,
    /// Selected/highlighted items
    pub selected: Color32,
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
    pub background: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = DeskColors::default();
        Theme {
            colors: colors.clone(),
            normal: colors.text,
            selected: colors.blue_primary,
            border: colors.border,
            dim: colors.gray_secondary,
            success: colors.green_success,
            error: colors.red_error,
            warning: colors.orange_warning,
            info: colors.cyan_info,
            background: colors.background,
        }
    }
}

impl Theme {
    /// Badge colour of a shipment request status
    pub fn request_status_color(&self, status: &RequestStatus) -> Color32 {
        match status {
            RequestStatus::Pending => self.warning,
            RequestStatus::Matched => self.success,
            RequestStatus::Cancelled => self.error,
            RequestStatus::Other(_) => self.dim,
        }
    }

    /// Badge colour of an offer status
    pub fn offer_status_color(&self, status: &OfferStatus) -> Color32 {
        match status {
            OfferStatus::Pending => self.warning,
            OfferStatus::Accepted => self.success,
            OfferStatus::Rejected => self.error,
            OfferStatus::Other(_) => self.dim,
        }
    }

    /// Badge colour of the free-text statuses on the admin console
    pub fn admin_status_color(&self, status: &str) -> Color32 {
        match status {
            "Actif" | "Terminé" | "Résolu" => self.success,
            "En attente" | "En cours" | "Ouvert" => self.warning,
            "Suspendu" | "Annulé" | "Haute" => self.error,
            _ => self.info,
        }
    }

    pub fn visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::light();

        visuals.override_text_color = Some(colors.text);
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.surface;
        visuals.window_stroke = Stroke::new(1.0, colors.border);
        visuals.faint_bg_color = Color32::from_rgb(249, 250, 251);
        visuals.extreme_bg_color = colors.surface;

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.hovered.weak_bg_fill = colors.blue_light;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.blue_primary);
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, colors.blue_primary);

        visuals.selection.bg_fill = colors.blue_light;
        visuals.selection.stroke = Stroke::new(1.0, colors.blue_primary);
        visuals.hyperlink_color = colors.blue_primary;

        visuals
    }

    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
    }
}
