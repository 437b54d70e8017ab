//! UI domain: player dash and ground indicator.

use bevy::prelude::*;

use crate::movement::{DASH_DURATION, MovementState, Player};

pub(crate) const DASH_BAR_WIDTH: f32 = 120.0;
pub(crate) const DASH_BAR_HEIGHT: f32 = 12.0;
pub(crate) const HUD_PADDING: f32 = 16.0;

const DASHING_COLOR: Color = Color::srgb(0.3, 0.85, 0.95);
const GROUNDED_COLOR: Color = Color::srgb(0.2, 0.8, 0.3);
const AIRBORNE_COLOR: Color = Color::srgb(0.5, 0.5, 0.55);

/// Marker for the dash charge fill element
#[derive(Component)]
pub struct DashChargeFill;

/// Marker for the dash state label
#[derive(Component)]
pub struct DashStateText;

pub(crate) fn spawn_dash_hud(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING),
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                DashStateText,
                Text::new("DASH"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(GROUNDED_COLOR),
            ));

            parent
                .spawn((
                    Node {
                        width: Val::Px(DASH_BAR_WIDTH),
                        height: Val::Px(DASH_BAR_HEIGHT),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
                    BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
                ))
                .with_children(|bar| {
                    bar.spawn((
                        DashChargeFill,
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(GROUNDED_COLOR),
                    ));
                });
        });
}

/// Indicator color: dashing, grounded or airborne.
pub(crate) fn dash_hud_color(state: &MovementState) -> Color {
    if state.can_dash() {
        DASHING_COLOR
    } else if state.is_grounded() {
        GROUNDED_COLOR
    } else {
        AIRBORNE_COLOR
    }
}

pub(crate) fn update_dash_hud(
    player_query: Query<&MovementState, (With<Player>, Changed<MovementState>)>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<DashChargeFill>>,
    mut text_query: Query<&mut TextColor, With<DashStateText>>,
) {
    let Ok(state) = player_query.single() else {
        return;
    };

    let color = dash_hud_color(state);
    let percent = (state.dash_time_remaining / DASH_DURATION).clamp(0.0, 1.0);

    for (mut node, mut bg_color) in &mut fill_query {
        node.width = Val::Percent(percent * 100.0);
        bg_color.0 = color;
    }
    for mut text_color in &mut text_query {
        text_color.0 = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::ContactTag;

    #[test]
    fn test_hud_color_tracks_controller_queries() {
        let mut state = MovementState::new(Vec2::new(0.0, 1.25));
        assert_eq!(dash_hud_color(&state), GROUNDED_COLOR);

        state.on_contact_end(ContactTag::Platform);
        assert_eq!(dash_hud_color(&state), AIRBORNE_COLOR);

        state.dash_active = true;
        assert_eq!(dash_hud_color(&state), DASHING_COLOR);
    }
}
