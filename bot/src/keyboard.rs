use tictactoe_bot_common::games::tictactoe::{BOARD_SIZE, CELL_COUNT, Mark};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub text: String,
    pub callback_data: String,
}

/// Inline keyboard with one button per cell; the callback data is the cell index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    pub fn from_cells(cells: &[Mark; CELL_COUNT]) -> Self {
        let buttons: Vec<Button> = cells
            .iter()
            .enumerate()
            .map(|(index, mark)| Button {
                text: mark.symbol().to_string(),
                callback_data: index.to_string(),
            })
            .collect();

        Self {
            rows: buttons.chunks(BOARD_SIZE).map(<[Button]>::to_vec).collect(),
        }
    }

    pub fn render_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|button| button.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
