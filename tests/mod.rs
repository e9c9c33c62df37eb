pub mod macros;



/// Frame marker the current build emits for a call site.
pub fn marker(line: u32, file: &str, function: &str) -> String {
    if error_trail::config::SOURCE_LOCATION {
        format!("\n( {}:{} , in {}() )    ->  ", file, line, function)
    } else {
        "\n".to_string()
    }
}
