//! Integration tests for caur
//!
//! Every test points HOME at a temporary directory. Scenarios are chosen so
//! that no external program (git, makepkg, pacman) is ever spawned.

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    struct Home {
        dir: TempDir,
    }

    impl Home {
        fn new() -> Self {
            Self {
                dir: TempDir::new().unwrap(),
            }
        }

        fn cache(&self) -> PathBuf {
            self.dir.path().join(".cache").join("caur")
        }

        fn config(&self) -> PathBuf {
            self.dir.path().join("config.toml")
        }

        fn cmd(&self) -> Command {
            let mut cmd = cargo_bin_cmd!("caur");
            cmd.env("HOME", self.dir.path())
                .env("CAUR_CONFIG", self.config())
                .env_remove("CI");
            cmd
        }

        /// Cache entry with a PKGBUILD, as left behind by an earlier clone
        fn cached(&self, name: &str) -> PathBuf {
            let dir = self.cache().join(name);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("PKGBUILD"), format!("pkgname={name}\n")).unwrap();
            dir
        }

        /// Cache entry without a recipe, as left by cloning an unknown name
        fn cached_empty(&self, name: &str) -> PathBuf {
            let dir = self.cache().join(name);
            fs::create_dir_all(&dir).unwrap();
            dir
        }
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn help_displays() {
        let home = Home::new();
        home.cmd()
            .arg("-h")
            .assert()
            .success()
            .stdout(predicate::str::contains("Install package"))
            .stdout(predicate::str::contains("Remove package"))
            .stdout(predicate::str::contains("Clear package cache"));

        home.cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("caur <operation> [targets]"));
    }

    #[test]
    fn version_displays() {
        Home::new()
            .cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("caur"));
    }

    #[test]
    fn no_arguments() {
        let home = Home::new();
        home.cmd()
            .assert()
            .failure()
            .stderr(predicate::str::contains("no operation specified"));
        assert!(!home.cache().exists());
    }

    #[test]
    fn non_flag_first_argument() {
        let home = Home::new();
        home.cmd()
            .args(["yay", "-S"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no operation specified"));
        assert!(!home.cache().exists());
    }

    #[test]
    fn unrecognized_option() {
        let home = Home::new();
        home.cmd()
            .arg("-X")
            .assert()
            .failure()
            .stderr(predicate::str::contains("unrecognized option '-X'"));
        assert!(!home.cache().exists());
    }

    #[test]
    fn missing_targets() {
        let home = Home::new();
        for op in ["-S", "-R"] {
            home.cmd()
                .arg(op)
                .assert()
                .failure()
                .stderr(predicate::str::contains("no targets specified"));
        }
        assert!(!home.cache().exists());
    }

    #[test]
    fn invalid_package_name() {
        let home = Home::new();
        home.cmd()
            .args(["-S", "../../etc"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid package name"));
        assert!(!home.cache().exists());
    }

    #[test]
    fn invalid_config_file() {
        let home = Home::new();
        fs::write(home.config(), "[build\n").unwrap();
        home.cmd()
            .arg("-C")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn clear_all_creates_and_empties_root() {
        let home = Home::new();
        home.cmd().arg("-C").assert().success();
        assert!(home.cache().is_dir());

        home.cached("yay");
        home.cached("paru");
        home.cmd().arg("-C").assert().success();

        assert!(home.cache().is_dir());
        assert!(entries(&home.cache()).is_empty());
    }

    #[test]
    fn clear_named_target() {
        let home = Home::new();
        home.cached("yay");
        home.cached("paru");

        home.cmd().args(["-C", "yay"]).assert().success();
        assert_eq!(entries(&home.cache()), vec!["paru"]);
    }

    #[test]
    fn clear_missing_target() {
        let home = Home::new();
        home.cached("yay");

        home.cmd()
            .args(["-C", "missing"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("target not found: missing"));
        assert_eq!(entries(&home.cache()), vec!["yay"]);
    }

    #[test]
    fn install_cached_recipe_declined() {
        let home = Home::new();
        home.cached("yay");

        home.cmd()
            .args(["-S", "yay"])
            .write_stdin("n\nn\n")
            .assert()
            .success()
            .stdout(predicate::eq(
                "Check contents of PKGBUILD? [Y/n] Proceed with installation? [Y/n] ",
            ));

        assert!(home.cache().join("yay").join("PKGBUILD").is_file());
    }

    #[test]
    fn install_invalid_review_answer() {
        let home = Home::new();
        home.cached("yay");

        home.cmd()
            .args(["-S", "yay"])
            .write_stdin("x\n")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid input"))
            .stdout(predicate::str::contains("Proceed with installation").not());
    }

    #[test]
    fn install_missing_recipe_halts_batch() {
        let home = Home::new();
        let broken = home.cached_empty("broken");
        home.cached("yay");

        home.cmd()
            .args(["-S", "broken", "yay"])
            .write_stdin("n\nn\n")
            .assert()
            .failure()
            .stderr(predicate::str::contains("target not found: broken"))
            .stdout(predicate::str::contains("Check contents").not());

        assert!(!broken.exists());
        assert!(home.cache().join("yay").is_dir());
    }
}
