use std::fmt;

pub fn render(f: &mut fmt::Formatter<'_>, dummy: &[String]) -> fmt::Result {
    writeln!(f, "(dummy to load dummy data)")?;
    for item in dummy {
        writeln!(f, "- {item}")?;
    }
    Ok(())
}
