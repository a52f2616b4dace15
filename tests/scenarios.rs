//! Black-box scenario tests: literal Mython programs run end to end through
//! `mython::run_source` against an in-memory sink, asserting exact output.

fn run(source: &str) -> String {
    let mut out = Vec::new();
    mython::run_source(source, &mut out).expect("program should run without error");
    String::from_utf8(out).expect("output should be valid utf8")
}

#[test]
fn arithmetic_and_print() {
    let source = "x = 4\ny = 5\nprint x + y, x * y, x - y\n";
    assert_eq!(run(source), "9 20 -1\n");
}

#[test]
fn string_concatenation_and_stringify() {
    let source = "s = \"he\" + \"llo\"\nprint s, str(42), str(False)\n";
    assert_eq!(run(source), "hello 42 False\n");
}

#[test]
fn class_with_str_and_init() {
    let source = "\
class Point:
  def __init__(self, x, y):
    self.x = x
    self.y = y
  def __str__(self):
    return str(self.x) + \",\" + str(self.y)
p = Point(3, 4)
print p
";
    assert_eq!(run(source), "3,4\n");
}

#[test]
fn inheritance_and_method_override() {
    let source = "\
class A:
  def who(self):
    return \"A\"
class B(A):
  def who(self):
    return \"B\"
class C(B):
  def noop(self):
    return None
print C().who()
";
    assert_eq!(run(source), "B\n");
}

#[test]
fn polymorphic_add() {
    let source = "\
class Box:
  def __init__(self, v):
    self.v = v
  def __add__(self, o):
    return Box(self.v + o.v)
b = Box(1) + Box(2)
print b.v
";
    assert_eq!(run(source), "3\n");
}

#[test]
fn return_unwinds_nested_control_flow() {
    let source = "\
class K:
  def f(self, n):
    if n < 0:
      return \"neg\"
    if n == 0:
      return \"zero\"
    return \"pos\"
print K().f(-5)
print K().f(0)
print K().f(5)
";
    assert_eq!(run(source), "neg\nzero\npos\n");
}

#[test]
fn none_prints_as_none_but_is_not_stringifiable() {
    let mut out = Vec::new();
    mython::run_source("print None\n", &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "None\n");

    let mut out = Vec::new();
    let err = mython::run_source("print str(None)\n", &mut out).unwrap_err();
    assert_eq!(err.code(), "E_TYPE");
}

#[test]
fn instance_without_str_prints_identity_surrogate() {
    let source = "\
class Empty:
  def noop(self):
    return None
print Empty()
";
    let mut out = Vec::new();
    mython::run_source(source, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("<Empty object at 0x"));
    assert!(text.ends_with(">\n"));
}

#[test]
fn division_by_zero_is_a_structured_error() {
    let mut out = Vec::new();
    let err = mython::run_source("print 1 / 0\n", &mut out).unwrap_err();
    assert_eq!(err.code(), "E_ZERODIV");
}

#[test]
fn undefined_name_is_a_name_error() {
    let mut out = Vec::new();
    let err = mython::run_source("print missing\n", &mut out).unwrap_err();
    assert_eq!(err.code(), "E_NAME");
}

#[test]
fn top_level_return_is_unbound() {
    let mut out = Vec::new();
    let err = mython::run_source("return 1\n", &mut out).unwrap_err();
    assert_eq!(err.code(), "E_RETURN");
}

#[test]
fn negative_literals_parse_in_arguments_and_assignments() {
    assert_eq!(run("x = -1\nprint x\n"), "-1\n");
    assert_eq!(run("print 5 - -3\n"), "8\n");

    let source = "\
class K:
  def f(self, n):
    if n < 0:
      return \"neg\"
    if n == 0:
      return \"zero\"
    return \"pos\"
print K().f(-5)
";
    assert_eq!(run(source), "neg\n");
}

#[test]
fn logical_and_or_evaluate_to_bool_not_the_raw_operand() {
    assert_eq!(run("print 5 and 3\n"), "True\n");
    assert_eq!(run("print 0 or \"hi\"\n"), "True\n");
    assert_eq!(run("print 0 and 3\n"), "False\n");
    assert_eq!(run("print False or 0\n"), "False\n");
}
