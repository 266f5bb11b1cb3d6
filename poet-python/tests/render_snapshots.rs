//! Snapshot tests for rendered Python source.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use pypoet::{Block, DocString, Indent, PythonFile, Result, Statement};

#[test]
fn test_hello_world() -> Result<()> {
    let mut file = PythonFile::new();
    file.append(Statement::new("print('Hello world!')"))?;

    insta::assert_snapshot!(file.to_source(), @"print('Hello world!')");
    Ok(())
}

#[test]
fn test_if_else_script() -> Result<()> {
    let mut file = PythonFile::new();
    file.append(Statement::new("import sys"))?
        .append(Block::if_("len(sys.argv) > 1").add_statement("print('x')"))?
        .append(Block::else_().add_statement("print('Goodbye.')"))?;

    assert_eq!(
        file.to_source(),
        "import sys\nif len(sys.argv) > 1:\n    print('x')\nelse:\n    print('Goodbye.')\n"
    );
    insta::assert_snapshot!(file.to_source(), @r"
import sys
if len(sys.argv) > 1:
    print('x')
else:
    print('Goodbye.')
");
    Ok(())
}

#[test]
fn test_elif_chain_inside_function() -> Result<()> {
    let classify = Block::def("classify", ["n"])
        .add_docstring(DocString::new("Classify a number.").arg("n").returns("str"))
        .with(Block::if_("n < 0").add_statement("return 'negative'"))?
        .with(Block::elif("n == 0").add_statement("return 'zero'"))?
        .with(Block::else_().add_statement("return 'positive'"))?;

    let mut file = PythonFile::new();
    file.append(classify)?;

    insta::assert_snapshot!(file.to_source(), @r#"
def classify(n):
    """Classify a number.

    Args:
        n ():

    Returns:
        str:
    """
    if n < 0:
        return 'negative'
    elif n == 0:
        return 'zero'
    else:
        return 'positive'
"#);
    Ok(())
}

#[test]
fn test_class_with_methods() -> Result<()> {
    let mut cat = Block::class("Cat", ["DomesticMammal"]);
    cat.push_statement("lives = 9")
        .push_statement("")
        .append(
            Block::def("__init__", ["self", "name"]).add_statement("self.name = name"),
        )?
        .push_statement("")
        .append(Block::def("meow", ["self"]).returns("f'{self.name}: meow'"))?;

    let mut file = PythonFile::new();
    file.add_docstring(DocString::new("Cats."))
        .append(Statement::new("from animals import DomesticMammal"))?
        .append(Statement::new(""))?
        .append(cat)?;

    insta::assert_snapshot!(file.to_source(), @r#"
"""Cats."""

from animals import DomesticMammal

class Cat(DomesticMammal):
    lives = 9

    def __init__(self, name):
        self.name = name

    def meow(self):
        return f'{self.name}: meow'
"#);
    Ok(())
}

#[test]
fn test_loops_and_empty_bodies() -> Result<()> {
    let mut file = PythonFile::new().with_indent(Indent::COMPACT);
    file.append(
        Block::while_("len(cats) > 100")
            .with(Block::for_("cat", "cats").add_statement("cats.remove(cat)"))?,
    )?
    .append(Block::def("noop", ["*args"]))?;

    insta::assert_snapshot!(file.to_source(), @r"
while len(cats) > 100:
  for cat in cats:
    cats.remove(cat)
def noop(*args):
  pass
");
    Ok(())
}

#[test]
fn test_multiline_statement() -> Result<()> {
    let mut file = PythonFile::new();
    file.append(Block::if_("debug").add_statement("log = {\n    'level': 'debug',\n}"))?;

    insta::assert_snapshot!(file.to_source(), @r"
if debug:
    log = {
        'level': 'debug',
    }
");
    Ok(())
}
