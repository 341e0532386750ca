//! Afya theme.
//!
//! A light theme built around the Afya brand green, plus the widget style
//! functions and spacing constants the views use.
//!
//! Style functions receive `&Theme` and read colors from it:
//!
//! ```rust,ignore
//! use crate::theme::button_primary;
//!
//! button(text("Submit")).style(button_primary)
//! ```

use iced::theme::Palette;
use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements.
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps inside cards and rows.
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps.
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps.
pub const SPACING_LG: f32 = 24.0;

/// Small radius - buttons, inputs.
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - cards.
pub const BORDER_RADIUS_MD: f32 = 6.0;

// =============================================================================
// COLORS
// =============================================================================

/// Brand green, used for primary actions and the active navigation item.
pub const AFYA_GREEN: Color = Color::from_rgb(0.106, 0.369, 0.125);

/// Hover shade of the brand green.
pub const AFYA_GREEN_DARK: Color = Color::from_rgb(0.075, 0.286, 0.094);

/// Pressed shade of the brand green.
pub const AFYA_GREEN_DEEP: Color = Color::from_rgb(0.055, 0.220, 0.071);

pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);
pub const GRAY_100: Color = Color::from_rgb(0.96, 0.96, 0.96);
pub const GRAY_300: Color = Color::from_rgb(0.85, 0.85, 0.85);
pub const GRAY_500: Color = Color::from_rgb(0.55, 0.55, 0.55);
pub const GRAY_700: Color = Color::from_rgb(0.35, 0.35, 0.35);
pub const GRAY_900: Color = Color::from_rgb(0.12, 0.13, 0.12);

pub const SUCCESS: Color = Color::from_rgb(0.24, 0.62, 0.28);
pub const AMBER: Color = Color::from_rgb(0.95, 0.65, 0.05);
pub const DANGER: Color = Color::from_rgb(0.83, 0.18, 0.18);

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the Afya application theme.
pub fn afya_theme() -> Theme {
    Theme::custom(
        "Afya Light".to_string(),
        Palette {
            background: Color::from_rgb(0.98, 0.98, 0.98),
            text: GRAY_900,
            primary: AFYA_GREEN,
            success: SUCCESS,
            warning: AMBER,
            danger: DANGER,
        },
    )
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions (submit, add post, request).
pub fn button_primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active => AFYA_GREEN,
        button::Status::Hovered => AFYA_GREEN_DARK,
        button::Status::Pressed => AFYA_GREEN_DEEP,
        button::Status::Disabled => GRAY_300,
    };
    let text_color = match status {
        button::Status::Disabled => GRAY_500,
        _ => WHITE,
    };
    let shadow = match status {
        button::Status::Hovered => Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 4.0,
        },
        _ => Shadow::default(),
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow,
        ..Default::default()
    }
}

/// Secondary button style - outlined alternative actions.
pub fn button_secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => AFYA_GREEN_DARK,
        button::Status::Disabled => GRAY_300,
        button::Status::Active => AFYA_GREEN,
    };
    let text_color = match status {
        button::Status::Disabled => GRAY_500,
        _ => AFYA_GREEN,
    };

    button::Style {
        background: Some(WHITE.into()),
        text_color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: border_color,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Ghost button style - borderless, for navigation items and clear buttons.
pub fn button_ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(GRAY_100.into()),
        _ => None,
    };

    button::Style {
        background,
        text_color: GRAY_700,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card style for post and drug entries.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(WHITE.into()),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: 1.0,
            color: GRAY_300,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.06),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    }
}

/// Bar style for the top header and the bottom navigation.
pub fn bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(WHITE.into()),
        border: Border {
            radius: 0.0.into(),
            width: 1.0,
            color: GRAY_100,
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style for the search box and compose form.
pub fn text_input_default(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border = match status {
        text_input::Status::Focused { .. } => Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 2.0,
            color: AFYA_GREEN,
        },
        text_input::Status::Hovered => Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: GRAY_500,
        },
        _ => Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: GRAY_300,
        },
    };

    text_input::Style {
        background: WHITE.into(),
        border,
        icon: GRAY_500,
        placeholder: GRAY_500,
        value: GRAY_900,
        selection: Color::from_rgba(0.106, 0.369, 0.125, 0.25),
    }
}
