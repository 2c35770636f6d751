use std::fs::File;

use crossterm::event::{Event as CrosstermEvent, KeyCode};
use simplelog::{Config, LevelFilter, WriteLogger};
use sortdom::{
    from_crossterm, Border, Color, Edges, Element, Size, SortableList, Style, Terminal, Viewport,
};

fn main() -> std::io::Result<()> {
    // Set up file logging; stdout belongs to the UI
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut term = Terminal::new()?;
    let (width, height) = term.size();
    let mut viewport = Viewport::new(width, height);

    let mut list = SortableList::new((1..=16).map(|i| task(&format!("Task {i:02}"))));

    loop {
        term.render(list.element(), &mut viewport)?;

        let raw_events = term.poll(None)?;
        for raw_event in &raw_events {
            // Exit on 'q' or Escape
            if let CrosstermEvent::Key(key) = raw_event {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        return Ok(());
                    }
                    _ => {}
                }
            }

            if let Some(pointer) = from_crossterm(raw_event) {
                list.handle_event(&pointer, term.layout(), &mut viewport);
            }
        }
    }
}

fn task(label: &str) -> Element {
    let bg = Color::oklch(0.28, 0.03, 250.0);
    let lifted = bg.mix(&Color::oklch(0.75, 0.1, 250.0), 0.35);

    Element::row()
        .height(Size::Fixed(3))
        .padding(Edges::symmetric(0, 1))
        .gap(1)
        .style(Style::new().background(bg).border(Border::Rounded))
        .style_dragging(Style::new().background(lifted).border(Border::Rounded).bold())
        .child(
            Element::text("≡")
                .width(Size::Fixed(2))
                .grab_handle(true)
                .style(Style::new().bold()),
        )
        .child(Element::text(label).width(Size::Fill))
        .child(
            Element::text("✕")
                .width(Size::Fixed(2))
                .delete_handle(true)
                .style(Style::new().dim()),
        )
}
