#![allow(unexpected_cfgs)]

use std::{
  env, fs,
  io::{Read, Write},
  path::PathBuf,
  process::{Command, Stdio},
  thread::{self, JoinHandle},
};

use dyntest::{dyntest, DynTester};

#[cfg(not(rust_analyzer))]
dyntest!(tests);

fn tests(t: &mut DynTester) {
  env::set_current_dir("..").unwrap();

  t.group("check", |t| {
    test_check(t, "reference", None, true);
    test_check(t, "powers", Some("tests/tables/powers.table"), true);
    test_check(t, "comments", Some("tests/tables/comments.table"), true);

    t.group("fail", |t| {
      test_check(t, "wrong_expectations", Some("tests/tables/wrong_expectations.table"), false);
      test_check(t, "bad_degree", Some("tests/tables/bad_degree.table"), false);
      test_check(t, "malformed", Some("tests/tables/malformed.table"), false);
      test_check(t, "missing", Some("tests/tables/missing.table"), false);
    });
  });

  t.group("root", |t| {
    test_root(t, "zero", &["0", "7"], true);
    test_root(t, "one", &["1", "15"], true);
    test_root(t, "square", &["189943527", "2"], true);
    test_root(t, "perfect_cube", &["4096", "3", "--exact"], true);
    test_root(t, "mersenne_127", &["170141183460469231731687303715884105727", "6", "--exact"], true);
    test_root(t, "two_to_the_200", &[TWO_TO_THE_200, "5", "--exact"], true);
    test_root(t, "hex", &["18446744073709551616", "2", "--hex"], true);
    test_root(t, "hex_exact", &["1000000", "3", "--hex", "--exact"], true);
    test_root(t, "huge_degree", &["2", "100000000"], true);

    t.group("fail", |t| {
      test_root(t, "degree_one", &["8", "1"], false);
      test_root(t, "not_a_number", &["12a", "2"], false);
      test_root(t, "empty", &["", "2"], false);
    });
  });
}

const NATROOT: &[&str] = &["natroot"];
const TWO_TO_THE_200: &str = "1606938044258990275541962092341162602522202993782792835301376";

fn test_check(t: &mut DynTester, name: &'static str, table: Option<&'static str>, success: bool) {
  let group = if success { "check" } else { "check_fail" };
  t.test(name, move || {
    let args: Vec<&str> = ["check"].into_iter().chain(table).collect();
    let (stdout, stderr) = exec(NATROOT, &args, &[], success);
    test_snapshot(&[group, name, "stdout.txt"], &stdout);
    test_snapshot(&[group, name, "stderr.txt"], &stderr);
  });
}

fn test_root(t: &mut DynTester, name: &'static str, args: &'static [&'static str], success: bool) {
  let group = if success { "root" } else { "root_fail" };
  t.test(name, move || {
    let args: Vec<&str> = ["root"].into_iter().chain(args.iter().copied()).collect();
    let (stdout, stderr) = exec(NATROOT, &args, &[], success);
    if success {
      assert!(stderr.is_empty());
    }
    test_snapshot(&[group, name, "stdout.txt"], &stdout);
    test_snapshot(&[group, name, "stderr.txt"], &stderr);
  });
}

fn exec(bin: &[&str], args: &[&str], input: &[u8], success: bool) -> (Vec<u8>, Vec<u8>) {
  let mut child = Command::new(env!("CARGO"))
    .args(["run", "--quiet", "--bin"])
    .args(bin)
    .arg("--")
    .args(args)
    .env_remove("RUST_LOG")
    .env_remove("NATROOT_TABLE")
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()
    .unwrap();

  child.stdin.take().unwrap().write_all(input).unwrap();

  let stdout = parallel_read(child.stdout.take().unwrap());
  let stderr = parallel_read(child.stderr.take().unwrap());

  let status = child.wait().unwrap();
  if status.success() != success {
    let err = String::from_utf8(stderr.join().unwrap()).unwrap();
    eprintln!("{err}");
    panic!("{status}");
  }

  (stdout.join().unwrap(), stderr.join().unwrap())
}

fn test_snapshot(components: &[&str], contents: &[u8]) -> PathBuf {
  let path = get_snapshot_path(components);
  let existing = fs::read(&path).ok();
  if existing.is_none_or(|x| x != contents) {
    if should_write_snapshot() {
      println!("updating snapshot {:?}", path);
      fs::write(&path, contents).unwrap();
    } else {
      panic!("invalid snapshot {:?}", path);
    }
  }
  path
}

fn get_snapshot_path(components: &[&str]) -> PathBuf {
  let mut path = PathBuf::from("tests/snaps");
  path.extend(components);
  fs::create_dir_all(path.parent().unwrap()).unwrap();
  path
}

fn should_write_snapshot() -> bool {
  env::var("SNAP_CHECK").is_err()
}

fn parallel_read(mut read: impl Read + Send + 'static) -> JoinHandle<Vec<u8>> {
  thread::spawn(move || {
    let mut buf = Vec::new();
    read.read_to_end(&mut buf).unwrap();
    buf
  })
}
