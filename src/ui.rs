use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use grade_compass::{
    compute_cgpa, compute_final_grade, required_marks_table, CgpaOutcome, CourseLedger,
    CourseRecord, FinalGrade, LetterGrade, NoResultReason, TargetRequirement, SESSIONAL_1_MAX,
    SESSIONAL_2_MAX, VERSION,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;

const MARKS_STEP: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    GradePredictor,
    CgpaCalculator,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::GradePredictor => Page::CgpaCalculator,
            Page::CgpaCalculator => Page::GradePredictor,
        }
    }

    pub fn previous(&self) -> Self {
        // Two pages, so forward and back meet
        self.next()
    }

    pub fn title(&self) -> &str {
        match self {
            Page::GradePredictor => "Grade Predictor",
            Page::CgpaCalculator => "CGPA Calculator",
        }
    }
}

/// Focusable rows on the predictor form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictorField {
    Sessional1,
    Engagement,
    Sessional2,
}

impl PredictorField {
    fn next(&self) -> Self {
        match self {
            PredictorField::Sessional1 => PredictorField::Engagement,
            PredictorField::Engagement => PredictorField::Sessional2,
            PredictorField::Sessional2 => PredictorField::Sessional1,
        }
    }

    fn previous(&self) -> Self {
        match self {
            PredictorField::Sessional1 => PredictorField::Sessional2,
            PredictorField::Engagement => PredictorField::Sessional1,
            PredictorField::Sessional2 => PredictorField::Engagement,
        }
    }
}

/// Focusable rows on the CGPA form: three inputs plus three action rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    Name,
    Credits,
    Grade,
    AddCourse,
    ComputeCgpa,
    ClearLedger,
}

impl CourseField {
    const ORDER: [CourseField; 6] = [
        CourseField::Name,
        CourseField::Credits,
        CourseField::Grade,
        CourseField::AddCourse,
        CourseField::ComputeCgpa,
        CourseField::ClearLedger,
    ];

    fn next(&self) -> Self {
        let i = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn previous(&self) -> Self {
        let i = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Cached output of the last explicit predictor computation.
pub struct Prediction {
    pub final_grade: FinalGrade,
    pub required: Vec<(LetterGrade, TargetRequirement)>,
}

pub struct App {
    pub current_page: Page,

    // Grade predictor form
    pub s1_marks: f64,
    pub engagement_idx: usize,
    pub s2_marks: f64,
    pub predictor_focus: PredictorField,
    pub prediction: Option<Prediction>,

    // CGPA form + session ledger
    pub course_name: String,
    pub course_credits: u32,
    pub course_grade_idx: usize,
    pub course_focus: CourseField,
    pub ledger: CourseLedger,
    pub ledger_state: TableState,
    pub cgpa_result: Option<CgpaOutcome>,
}

impl App {
    pub fn new() -> Self {
        Self {
            current_page: Page::GradePredictor,
            s1_marks: 0.0,
            engagement_idx: 0,
            s2_marks: 0.0,
            predictor_focus: PredictorField::Sessional1,
            prediction: None,
            course_name: String::new(),
            course_credits: 1,
            course_grade_idx: 0,
            course_focus: CourseField::Name,
            ledger: CourseLedger::new(),
            ledger_state: TableState::default(),
            cgpa_result: None,
        }
    }

    pub fn engagement(&self) -> LetterGrade {
        LetterGrade::ALL[self.engagement_idx]
    }

    pub fn course_grade(&self) -> LetterGrade {
        LetterGrade::COURSE_GRADES[self.course_grade_idx]
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    // ------------------------------------------------------------------
    // Grade predictor actions
    // ------------------------------------------------------------------

    /// Adjust the focused predictor field. Marks clamp to their band so the
    /// core never sees out-of-range input; any edit drops the stale result.
    pub fn adjust_predictor(&mut self, direction: f64) {
        match self.predictor_focus {
            PredictorField::Sessional1 => {
                self.s1_marks = (self.s1_marks + direction * MARKS_STEP)
                    .clamp(0.0, SESSIONAL_1_MAX);
            }
            PredictorField::Sessional2 => {
                self.s2_marks = (self.s2_marks + direction * MARKS_STEP)
                    .clamp(0.0, SESSIONAL_2_MAX);
            }
            PredictorField::Engagement => {
                let len = LetterGrade::ALL.len();
                self.engagement_idx = if direction > 0.0 {
                    (self.engagement_idx + 1) % len
                } else {
                    (self.engagement_idx + len - 1) % len
                };
            }
        }
        self.prediction = None;
    }

    /// One discrete call into the predictor; the result stays rendered
    /// until an input edit invalidates it.
    pub fn compute_prediction(&mut self) -> Result<()> {
        let final_grade = compute_final_grade(self.s1_marks, self.engagement(), self.s2_marks)?;
        let required = required_marks_table(self.s1_marks, self.engagement())?;
        self.prediction = Some(Prediction {
            final_grade,
            required,
        });
        Ok(())
    }

    // ------------------------------------------------------------------
    // CGPA actions
    // ------------------------------------------------------------------

    pub fn adjust_course_field(&mut self, direction: f64) {
        match self.course_focus {
            CourseField::Credits => {
                if direction > 0.0 {
                    self.course_credits += 1;
                } else if self.course_credits > 1 {
                    self.course_credits -= 1;
                }
            }
            CourseField::Grade => {
                let len = LetterGrade::COURSE_GRADES.len();
                self.course_grade_idx = if direction > 0.0 {
                    (self.course_grade_idx + 1) % len
                } else {
                    (self.course_grade_idx + len - 1) % len
                };
            }
            _ => {}
        }
    }

    /// Append the form's course to the ledger and reset the name field.
    pub fn add_course(&mut self) {
        let record = CourseRecord::new(&self.course_name, self.course_credits, self.course_grade());
        self.ledger.append(record);
        self.course_name.clear();
        self.ledger_state.select(Some(self.ledger.len() - 1));
        // The displayed CGPA no longer reflects the ledger
        self.cgpa_result = None;
    }

    pub fn compute_cgpa_result(&mut self) {
        self.cgpa_result = Some(compute_cgpa(self.ledger.courses()));
    }

    pub fn clear_ledger(&mut self) {
        self.ledger.clear();
        self.ledger_state.select(None);
        self.cgpa_result = None;
    }

    pub fn push_name_char(&mut self, c: char) {
        self.course_name.push(c);
    }

    pub fn pop_name_char(&mut self) {
        self.course_name.pop();
    }

    fn name_field_focused(&self) -> bool {
        self.current_page == Page::CgpaCalculator && self.course_focus == CourseField::Name
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Typed course name characters win over command keys
            if app.name_field_focused() {
                match key.code {
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.push_name_char(c);
                        continue;
                    }
                    KeyCode::Backspace => {
                        app.pop_name_char();
                        continue;
                    }
                    _ => {}
                }
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_page();
                    } else {
                        app.next_page();
                    }
                }
                KeyCode::BackTab => app.previous_page(),
                KeyCode::Down | KeyCode::Char('j') => match app.current_page {
                    Page::GradePredictor => {
                        app.predictor_focus = app.predictor_focus.next();
                    }
                    Page::CgpaCalculator => {
                        app.course_focus = app.course_focus.next();
                    }
                },
                KeyCode::Up | KeyCode::Char('k') => match app.current_page {
                    Page::GradePredictor => {
                        app.predictor_focus = app.predictor_focus.previous();
                    }
                    Page::CgpaCalculator => {
                        app.course_focus = app.course_focus.previous();
                    }
                },
                KeyCode::Left => match app.current_page {
                    Page::GradePredictor => app.adjust_predictor(-1.0),
                    Page::CgpaCalculator => app.adjust_course_field(-1.0),
                },
                KeyCode::Right => match app.current_page {
                    Page::GradePredictor => app.adjust_predictor(1.0),
                    Page::CgpaCalculator => app.adjust_course_field(1.0),
                },
                KeyCode::Enter => match app.current_page {
                    Page::GradePredictor => app.compute_prediction()?,
                    Page::CgpaCalculator => match app.course_focus {
                        CourseField::ComputeCgpa => app.compute_cgpa_result(),
                        CourseField::ClearLedger => app.clear_ledger(),
                        // Enter anywhere on the form submits the course
                        _ => app.add_course(),
                    },
                },
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.current_page {
        Page::GradePredictor => render_predictor(f, chunks[1], app),
        Page::CgpaCalculator => render_cgpa(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let pages = [Page::GradePredictor, Page::CgpaCalculator];

    let mut tab_spans = vec![];
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(page.title(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Courses: {}", app.ledger.len()),
        Style::default().fg(Color::White),
    ));
    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("v{}", VERSION),
        Style::default().fg(Color::DarkGray),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" 🎓 Grade Compass "),
    );

    f.render_widget(header, area);
}

// ------------------------------------------------------------------
// Grade predictor page
// ------------------------------------------------------------------

fn render_predictor(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),  // Input form
            Constraint::Length(4),  // Final grade result
            Constraint::Min(0),     // Required marks table
        ])
        .split(area);

    render_predictor_form(f, chunks[0], app);
    render_prediction_result(f, chunks[1], app);
    render_required_table(f, chunks[2], app);
}

fn field_marker(focused: bool) -> Span<'static> {
    if focused {
        Span::styled("→ ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        Span::raw("  ")
    }
}

fn field_label(text: &str, focused: bool) -> Span<'_> {
    let style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Span::styled(text, style)
}

fn render_predictor_form(f: &mut Frame, area: Rect, app: &App) {
    let s1_focused = app.predictor_focus == PredictorField::Sessional1;
    let le_focused = app.predictor_focus == PredictorField::Engagement;
    let s2_focused = app.predictor_focus == PredictorField::Sessional2;

    let mut content = vec![
        Line::from(vec![
            field_marker(s1_focused),
            field_label("Sessional 1 Marks: ", s1_focused),
            Span::styled(
                format!("{:.1} / {:.0}", app.s1_marks, SESSIONAL_1_MAX),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            field_marker(le_focused),
            field_label("Learning Engagement Grade: ", le_focused),
            Span::styled(
                app.engagement().as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            field_marker(s2_focused),
            field_label("Sessional 2 Marks: ", s2_focused),
            Span::styled(
                format!("{:.1} / {:.0}", app.s2_marks, SESSIONAL_2_MAX),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    if app.engagement() == LetterGrade::L {
        content.push(Line::from(Span::styled(
            "  ⚠️  Learning Engagement = L severely impacts final grade",
            Style::default().fg(Color::Red),
        )));
    } else {
        content.push(Line::from(""));
    }

    content.push(Line::from(Span::styled(
        "  ←/→ adjust · Enter calculate",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));

    let form = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" 📘 Course Grade Predictor "),
    );

    f.render_widget(form, area);
}

fn render_prediction_result(f: &mut Frame, area: Rect, app: &App) {
    let content = match &app.prediction {
        Some(prediction) => {
            let grade = prediction.final_grade.letter;
            let grade_color = if grade.is_passing() {
                Color::Green
            } else {
                Color::Red
            };

            vec![
                Line::from(vec![
                    Span::styled("  🎯 Final Grade: ", Style::default().fg(Color::Cyan)),
                    Span::styled(
                        grade.as_str(),
                        Style::default().fg(grade_color).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("  Weighted Grade Point: ", Style::default().fg(Color::Cyan)),
                    Span::styled(
                        format!("{:.2}", prediction.final_grade.wgp),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                ]),
            ]
        }
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Press Enter to calculate the final grade",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )),
        ],
    };

    let result = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Result "),
    );

    f.render_widget(result, area);
}

fn render_required_table(f: &mut Frame, area: Rect, app: &App) {
    let header_cells = ["Target", "Required Sessional 2"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows: Vec<Row> = match &app.prediction {
        Some(prediction) => prediction
            .required
            .iter()
            .map(|(target, requirement)| {
                let requirement_cell = match requirement {
                    TargetRequirement::Achievable(marks) => Cell::from(format!(
                        "~{:.2} / {:.0}",
                        marks, SESSIONAL_2_MAX
                    ))
                    .style(Style::default().fg(Color::Green)),
                    TargetRequirement::Unattainable => Cell::from("❌ Not achievable")
                        .style(Style::default().fg(Color::Red)),
                };

                Row::new(vec![Cell::from(target.as_str()), requirement_cell]).height(1)
            })
            .collect(),
        None => vec![],
    };

    let table = Table::new(rows, [Constraint::Length(8), Constraint::Length(24)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" 🔮 Required Sessional 2 Marks "),
        );

    f.render_widget(table, area);
}

// ------------------------------------------------------------------
// CGPA page
// ------------------------------------------------------------------

fn render_cgpa(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),  // Course form + actions
            Constraint::Min(4),     // Ledger table
            Constraint::Length(4),  // CGPA result
        ])
        .split(area);

    render_course_form(f, chunks[0], app);
    render_ledger_table(f, chunks[1], app);
    render_cgpa_result(f, chunks[2], app);
}

fn render_course_form(f: &mut Frame, area: Rect, app: &App) {
    let name_focused = app.course_focus == CourseField::Name;
    let credits_focused = app.course_focus == CourseField::Credits;
    let grade_focused = app.course_focus == CourseField::Grade;
    let add_focused = app.course_focus == CourseField::AddCourse;
    let compute_focused = app.course_focus == CourseField::ComputeCgpa;
    let clear_focused = app.course_focus == CourseField::ClearLedger;

    let name_display = if name_focused {
        format!("{}_", app.course_name)
    } else if app.course_name.is_empty() {
        "(optional)".to_string()
    } else {
        app.course_name.clone()
    };

    let content = vec![
        Line::from(vec![
            field_marker(name_focused),
            field_label("Course name: ", name_focused),
            Span::styled(name_display, Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            field_marker(credits_focused),
            field_label("Credits: ", credits_focused),
            Span::styled(
                format!("{}", app.course_credits),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            field_marker(grade_focused),
            field_label("Final Grade: ", grade_focused),
            Span::styled(
                app.course_grade().as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            field_marker(add_focused),
            field_label("➕ Add course", add_focused),
        ]),
        Line::from(vec![
            field_marker(compute_focused),
            field_label("🧮 Calculate CGPA", compute_focused),
        ]),
        Line::from(vec![
            field_marker(clear_focused),
            field_label("🗑 Clear all courses", clear_focused),
        ]),
    ];

    let form = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" 📊 CGPA Calculator "),
    );

    f.render_widget(form, area);
}

fn render_ledger_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["#", "Course", "Credits", "Grade"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.ledger.courses().iter().enumerate().map(|(i, course)| {
        let grade_color = if course.is_incomplete() {
            Color::Yellow
        } else {
            Color::Green
        };

        let cells = vec![
            Cell::from(format!("{}", i + 1)),
            Cell::from(course.name.clone()),
            Cell::from(format!("{}", course.credits)),
            Cell::from(course.grade.as_str()).style(Style::default().fg(grade_color)),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(32),
            Constraint::Length(9),
            Constraint::Length(7),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" 📚 Courses added "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.ledger_state);
}

fn render_cgpa_result(f: &mut Frame, area: Rect, app: &App) {
    let content = match &app.cgpa_result {
        Some(CgpaOutcome::Computed { cgpa, incomplete }) => {
            let mut lines = vec![Line::from(vec![
                Span::styled("  🎯 Current CGPA: ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("{:.2}", cgpa),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ])];

            if incomplete.is_empty() {
                lines.push(Line::from(Span::styled(
                    "  🔥 All courses completed.",
                    Style::default().fg(Color::Green),
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    format!(
                        "  📌 {} course(s) incomplete: {}",
                        incomplete.len(),
                        incomplete.join(", ")
                    ),
                    Style::default().fg(Color::Yellow),
                )));
            }

            lines
        }
        Some(CgpaOutcome::NoCompletedCourses { reason }) => {
            let message = match reason {
                NoResultReason::EmptyLedger => "  ❌ No courses added yet.",
                NoResultReason::AllIncomplete => "  ❌ All courses are incomplete.",
            };
            vec![
                Line::from(Span::styled(message, Style::default().fg(Color::Red))),
                Line::from(""),
            ]
        }
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Select 🧮 Calculate CGPA and press Enter",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )),
        ],
    };

    let result = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Result "),
    );

    f.render_widget(result, area);
}

// ------------------------------------------------------------------
// Status bar
// ------------------------------------------------------------------

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" Page | "),
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Field | "),
        Span::styled("←/→", Style::default().fg(Color::Yellow)),
        Span::raw(" Adjust | "),
    ];

    match app.current_page {
        Page::GradePredictor => {
            status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Calculate | "));
        }
        Page::CgpaCalculator => {
            status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Submit / Run action | "));
        }
    }

    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_invalidates_prediction() {
        let mut app = App::new();
        app.s1_marks = 24.0;
        app.s2_marks = 36.0;
        app.compute_prediction().unwrap();
        assert!(app.prediction.is_some());

        app.adjust_predictor(1.0);
        assert!(app.prediction.is_none());
    }

    #[test]
    fn test_marks_clamped_to_band() {
        let mut app = App::new();
        app.predictor_focus = PredictorField::Sessional1;
        app.adjust_predictor(-1.0);
        assert_eq!(app.s1_marks, 0.0);

        app.s1_marks = SESSIONAL_1_MAX;
        app.adjust_predictor(1.0);
        assert_eq!(app.s1_marks, SESSIONAL_1_MAX);
    }

    #[test]
    fn test_ledger_mutation_invalidates_cgpa() {
        let mut app = App::new();
        app.course_name = "Algorithms".to_string();
        app.course_credits = 3;
        app.add_course();

        app.compute_cgpa_result();
        assert!(app.cgpa_result.is_some());

        app.add_course();
        assert!(app.cgpa_result.is_none());

        app.compute_cgpa_result();
        app.clear_ledger();
        assert!(app.cgpa_result.is_none());
        assert!(app.ledger.is_empty());
    }

    #[test]
    fn test_add_course_resets_name_only() {
        let mut app = App::new();
        app.course_name = "Networks".to_string();
        app.course_credits = 4;
        app.add_course();

        assert!(app.course_name.is_empty());
        assert_eq!(app.course_credits, 4);
        assert_eq!(app.ledger.len(), 1);
        assert_eq!(app.ledger.courses()[0].name, "Networks");
    }

    #[test]
    fn test_credits_never_drop_below_one() {
        let mut app = App::new();
        app.course_focus = CourseField::Credits;
        app.adjust_course_field(-1.0);
        assert_eq!(app.course_credits, 1);
    }

    #[test]
    fn test_page_cycle() {
        let mut app = App::new();
        assert_eq!(app.current_page, Page::GradePredictor);
        app.next_page();
        assert_eq!(app.current_page, Page::CgpaCalculator);
        app.next_page();
        assert_eq!(app.current_page, Page::GradePredictor);
    }
}
