use assert_cmd::Command;

pub fn ftag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ftag").unwrap();
    cmd.env_remove("FTAG_BACKEND");
    cmd
}
