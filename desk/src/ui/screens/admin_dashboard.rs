//! # Admin Console
//!
//! Read-only back office rendered from the mounted snapshot.

use egui_extras::{Column, TableBuilder};
use shared::dto::{AdminRequestRow, AdminSnapshot, AdminUserRow, ReportedIssue};
use shared::utils::{format_amount, format_price};

use crate::app::{AdminTab, App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{badges, header};

const ROW_HEIGHT: f32 = 24.0;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let snapshot = &state.admin.snapshot;

    header::render_dashboard_header(ui, "Administration", &state.session_email(), app, &theme);

    if let Some(tab) = header::render_tabs(ui, AdminTab::all(), state.admin.tab, AdminTab::title) {
        app.select_admin_tab(tab);
    }

    egui::ScrollArea::vertical().show(ui, |ui| match state.admin.tab {
        AdminTab::Overview => render_overview(ui, snapshot, &theme),
        AdminTab::Users => users_table(ui, &snapshot.recent_users, &theme),
        AdminTab::Requests => requests_table(ui, &snapshot.recent_requests, &theme),
        AdminTab::Transactions => {
            badges::render_empty_state(ui, "Historique des transactions", Some("Aucune transaction à afficher."), &theme)
        }
        AdminTab::Reports => issues_table(ui, &snapshot.reported_issues, &theme),
        AdminTab::Analytics => render_analytics(ui, snapshot, &theme),
    });
}

fn render_overview(ui: &mut egui::Ui, snapshot: &AdminSnapshot, theme: &Theme) {
    let stats = &snapshot.stats;
    ui.horizontal_wrapped(|ui| {
        stat_card(ui, "Utilisateurs", &stats.total_users.to_string(), theme);
        stat_card(ui, "Transporteurs actifs", &stats.active_transporters.to_string(), theme);
        stat_card(ui, "Demandes", &stats.total_requests.to_string(), theme);
        stat_card(ui, "Transports terminés", &stats.completed_transports.to_string(), theme);
        stat_card(ui, "Chiffre d'affaires", &format_amount(stats.total_revenue), theme);
        stat_card(ui, "Croissance mensuelle", &format!("+{}%", stats.monthly_growth), theme);
    });
    ui.add_space(16.0);

    ui.strong("Derniers utilisateurs");
    users_table(ui, &snapshot.recent_users, theme);
    ui.add_space(16.0);

    ui.strong("Dernières demandes");
    requests_table(ui, &snapshot.recent_requests, theme);
}

fn stat_card(ui: &mut egui::Ui, label: &str, value: &str, theme: &Theme) {
    egui::Frame::new()
        .fill(theme.colors.surface)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_width(150.0);
            ui.colored_label(theme.dim, label);
            ui.label(egui::RichText::new(value).size(20.0).strong());
        });
}

fn users_table(ui: &mut egui::Ui, users: &[AdminUserRow], theme: &Theme) {
    ui.push_id("admin_users", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::auto().at_least(160.0))
            .column(Column::auto().at_least(220.0))
            .columns(Column::auto().at_least(100.0), 3)
            .header(ROW_HEIGHT, |mut header| {
                for title in ["Nom", "Email", "Type", "Statut", "Inscription"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for user in users {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(&user.name);
                        });
                        row.col(|ui| {
                            ui.label(&user.email);
                        });
                        row.col(|ui| {
                            ui.label(&user.kind);
                        });
                        row.col(|ui| {
                            badges::render_status_badge(ui, &user.status, theme.admin_status_color(&user.status));
                        });
                        row.col(|ui| {
                            ui.label(&user.join_date);
                        });
                    });
                }
            });
    });
}

fn requests_table(ui: &mut egui::Ui, requests: &[AdminRequestRow], theme: &Theme) {
    ui.push_id("admin_requests", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::auto().at_least(200.0))
            .column(Column::auto().at_least(140.0))
            .column(Column::auto().at_least(160.0))
            .columns(Column::auto().at_least(90.0), 3)
            .header(ROW_HEIGHT, |mut header| {
                for title in ["Demande", "Client", "Trajet", "Statut", "Prix", "Date"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for request in requests {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(&request.title);
                        });
                        row.col(|ui| {
                            ui.label(&request.client);
                        });
                        row.col(|ui| {
                            ui.label(format!("{} → {}", request.from, request.to));
                        });
                        row.col(|ui| {
                            badges::render_status_badge(ui, &request.status, theme.admin_status_color(&request.status));
                        });
                        row.col(|ui| {
                            ui.label(format_price(request.price));
                        });
                        row.col(|ui| {
                            ui.label(&request.date);
                        });
                    });
                }
            });
    });
}

fn issues_table(ui: &mut egui::Ui, issues: &[ReportedIssue], theme: &Theme) {
    if issues.is_empty() {
        badges::render_empty_state(ui, "Aucun signalement", None, theme);
        return;
    }

    ui.push_id("admin_issues", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::auto().at_least(180.0))
            .columns(Column::auto().at_least(160.0), 2)
            .columns(Column::auto().at_least(90.0), 3)
            .header(ROW_HEIGHT, |mut header| {
                for title in ["Type", "Signalé par", "Concerne", "Statut", "Priorité", "Date"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for issue in issues {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(&issue.kind);
                        });
                        row.col(|ui| {
                            ui.label(&issue.reporter);
                        });
                        row.col(|ui| {
                            ui.label(&issue.reported);
                        });
                        row.col(|ui| {
                            badges::render_status_badge(ui, &issue.status, theme.admin_status_color(&issue.status));
                        });
                        row.col(|ui| {
                            badges::render_status_badge(ui, &issue.priority, theme.admin_status_color(&issue.priority));
                        });
                        row.col(|ui| {
                            ui.label(&issue.date);
                        });
                    });
                }
            });
    });
}

fn render_analytics(ui: &mut egui::Ui, snapshot: &AdminSnapshot, theme: &Theme) {
    let stats = &snapshot.stats;
    let completion = if stats.total_requests == 0 {
        0.0
    } else {
        stats.completed_transports as f32 / stats.total_requests as f32
    };

    ui.strong("Taux de réalisation");
    ui.add(egui::ProgressBar::new(completion).show_percentage());
    ui.add_space(12.0);

    let average = if stats.completed_transports == 0 {
        0.0
    } else {
        stats.total_revenue / f64::from(stats.completed_transports)
    };
    ui.colored_label(theme.dim, format!("Revenu moyen par transport : {}", format_price(average)));
    ui.colored_label(theme.dim, format!("Croissance mensuelle : +{}%", stats.monthly_growth));
}
