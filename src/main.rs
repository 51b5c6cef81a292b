use std::error::Error;
use std::time::Duration;

use chrono::Local;

use duocal::app::App;
use duocal::picker::RangePicker;
use duocal::terminal::Terminal;
use duocal::terminal_event::TerminalEvent;
use duocal::view_json;

fn main() {
    let today = Local::now().date_naive();

    if std::env::args().any(|arg| arg == "--json") {
        if let Err(e) = print_snapshot(today) {
            eprintln!("Error: {}", e);
        }
        return;
    }

    if let Err(e) = run(today) {
        eprintln!("Error: {}", e);
    }
}

fn print_snapshot(today: chrono::NaiveDate) -> Result<(), Box<dyn Error>> {
    let picker = RangePicker::new(today)?;
    let value = view_json::view_to_json(&picker)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn run(today: chrono::NaiveDate) -> Result<(), Box<dyn Error>> {
    let mut terminal = Terminal::new()?;
    terminal.enter_raw_mode()?;
    terminal.enter_alt_screen()?;
    terminal.hide_cursor()?;

    let result = event_loop(&mut terminal, today);

    terminal.show_cursor()?;
    terminal.leave_alt_screen()?;
    terminal.exit_raw_mode()?;

    result
}

fn event_loop(terminal: &mut Terminal, today: chrono::NaiveDate) -> Result<(), Box<dyn Error>> {
    let mut app = App::new(today)?;

    let mut render_requested = true;

    loop {
        if terminal.poll(Duration::from_millis(100))? {
            match terminal.read_event()? {
                TerminalEvent::Key(key_event) => {
                    if app.handle_key(key_event) {
                        render_requested = true;
                    }
                }
                TerminalEvent::Resize { .. } => {
                    render_requested = true;
                }
            }
        }

        if render_requested {
            let frame = app.view();
            terminal.move_cursor(0, 0)?;
            terminal.clear_from_cursor_down()?;
            terminal.render_frame(&frame)?;
            terminal.flush()?;
            render_requested = false;
        }

        if app.should_exit() {
            break;
        }
    }

    Ok(())
}
