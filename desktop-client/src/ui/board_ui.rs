use eframe::egui;
use tictactoe_common::games::tictactoe::{
    BOARD_SIZE, Board, CELL_COUNT, Cell, Position, WinningLine,
};

pub struct TicTacToeBoardUi {
    last_hover: Option<Position>,
}

impl TicTacToeBoardUi {
    const BOARD_PADDING: f32 = 20.0;
    const MIN_CELL_SIZE: f32 = 60.0;
    const MAX_CELL_SIZE: f32 = 160.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    pub fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let available_board = (available_width.min(available_height) - Self::BOARD_PADDING * 2.0).max(0.0);
        let cell_size = available_board / BOARD_SIZE as f32;
        cell_size.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    /// Cell under `pointer`, if it lies on the board.
    pub fn cell_at(rect: egui::Rect, cell_size: f32, pointer: egui::Pos2) -> Option<Position> {
        if !rect.contains(pointer) || cell_size <= 0.0 {
            return None;
        }
        let col = ((pointer.x - rect.left()) / cell_size) as usize;
        let row = ((pointer.y - rect.top()) / cell_size) as usize;
        let position = Position::new(row, col);
        position.index().map(|_| position)
    }

    fn cell_rect(rect: egui::Rect, cell_size: f32, position: Position) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                rect.left() + position.col as f32 * cell_size,
                rect.top() + position.row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    /// Draws the board and returns the empty cell clicked this frame.
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<WinningLine>,
        interactive: bool,
    ) -> Option<Position> {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height());
        let board_side = cell_size * BOARD_SIZE as f32;

        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(board_side, board_side),
            egui::Sense::click(),
        );

        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(rect.left() + offset, rect.top()), egui::pos2(rect.left() + offset, rect.bottom())],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK),
            );
            painter.line_segment(
                [egui::pos2(rect.left(), rect.top() + offset), egui::pos2(rect.right(), rect.top() + offset)],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK),
            );
        }

        for index in 0..CELL_COUNT {
            let Some(position) = Position::from_index(index) else {
                continue;
            };
            let cell_rect = Self::cell_rect(rect, cell_size, position);
            match board.get(index) {
                Cell::X => self.draw_x(painter, cell_rect),
                Cell::O => self.draw_o(painter, cell_rect),
                Cell::Empty => {}
            }
        }

        if let Some(line) = winning_line {
            let start = Self::cell_rect(rect, cell_size, line.start()).center();
            let end = Self::cell_rect(rect, cell_size, line.end()).center();
            painter.line_segment(
                [start, end],
                egui::Stroke::new(6.0, egui::Color32::from_rgb(40, 160, 60)),
            );
        }

        if !interactive {
            self.last_hover = None;
            return None;
        }

        self.last_hover = response
            .hover_pos()
            .and_then(|pointer| Self::cell_at(rect, cell_size, pointer))
            .filter(|position| {
                position
                    .index()
                    .is_some_and(|index| board.is_empty_at(index))
            });

        if let Some(position) = self.last_hover {
            painter.rect_filled(
                Self::cell_rect(rect, cell_size, position),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
        }

        if response.clicked() {
            return self.last_hover;
        }

        None
    }

    fn draw_x(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(220, 50, 50));

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );

        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(50, 50, 220));

        painter.circle_stroke(rect.center(), radius, stroke);
    }
}
