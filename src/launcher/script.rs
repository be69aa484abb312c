/// Renders the POSIX launcher that execs `archive_name` from the directory
/// the script lives in, forwarding every argument.
pub fn generate(archive_name: &str) -> String {
    format!(
        r#"#!/bin/sh
DIR="$(cd "$(dirname "$0")" && pwd)"
exec java -jar "$DIR/{archive_name}" "$@""#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_archive_matches_template() {
        let script = generate("bounding-box.jar");
        assert_eq!(
            script,
            "#!/bin/sh\n\
             DIR=\"$(cd \"$(dirname \"$0\")\" && pwd)\"\n\
             exec java -jar \"$DIR/bounding-box.jar\" \"$@\""
        );
    }

    #[test]
    fn has_three_lines_without_trailing_newline() {
        let script = generate("bounding-box.jar");
        assert_eq!(script.lines().count(), 3);
        assert!(!script.ends_with('\n'));
    }

    #[test]
    fn archive_name_is_substituted() {
        let script = generate("other.jar");
        assert!(script.contains(r#""$DIR/other.jar""#));
        assert!(!script.contains("bounding-box.jar"));
    }
}
