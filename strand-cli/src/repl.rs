//! Interactive console for trying Strand code without hardware.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use strand_core::Interp;

pub fn run_repl(interp: &mut Interp) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    println!("strand v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Words are whitespace separated; try `1 2 + prtstk`.");
    println!("`prtdict` lists the dictionary, `clst` clears the stack.");
    println!("Ctrl-D exits.");
    println!();

    let mut editor = DefaultEditor::new()?;
    loop {
        // Show the open-sequence depth so multi-line definitions are
        // visible at the prompt.
        let depth = interp.compiler_depth();
        let prompt = if depth == 0 {
            "> ".to_string()
        } else {
            format!("{}] ", depth)
        };

        match editor.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                interp.run_line(&line);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(Box::new(err)),
        }
    }
    Ok(())
}
