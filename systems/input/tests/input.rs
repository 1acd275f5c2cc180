use flood_it_core::{CellCoord, Command};
use flood_it_system_input::{Input, PlayerInput};

#[test]
fn click_on_board_emits_click_command() {
    let mut commands = Vec::new();

    Input::new().handle(
        PlayerInput {
            click: true,
            cursor_cell: Some(CellCoord::new(3, 7)),
            ..PlayerInput::default()
        },
        &mut commands,
    );

    assert_eq!(
        commands,
        vec![Command::Click {
            cell: CellCoord::new(3, 7)
        }],
    );
}

#[test]
fn click_off_board_is_dropped() {
    let mut commands = Vec::new();

    Input::new().handle(PlayerInput::new(true, false, None), &mut commands);

    assert!(commands.is_empty(), "clicks outside the board emit nothing");
}

#[test]
fn hovering_without_click_emits_nothing() {
    let mut commands = Vec::new();

    Input::new().handle(
        PlayerInput::new(false, false, Some(CellCoord::ORIGIN)),
        &mut commands,
    );

    assert!(commands.is_empty());
}

#[test]
fn reset_precedes_click_on_the_same_frame() {
    let mut commands = Vec::new();

    Input::new().handle(
        PlayerInput::new(true, true, Some(CellCoord::new(1, 1))),
        &mut commands,
    );

    assert_eq!(
        commands,
        vec![
            Command::Reset,
            Command::Click {
                cell: CellCoord::new(1, 1)
            },
        ],
    );
}
