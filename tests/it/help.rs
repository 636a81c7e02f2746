use expect_test::expect;
use shellflags::{
    help::{Manual, Roster},
    Config, ErrorKind, Shell,
};

use crate::fixtures;

#[test]
fn manual() {
    let registry = fixtures::registry();
    let manual = Manual::new(&registry);

    expect![[r#"
        NAME
            foo-bar:dib -- Dibs an i, with optional alpha, bravo, and charlie behaviors.

        SYNOPSIS
            foo-bar:dib [options] [--] i [k]

        ARGUMENTS
            i
                The i to be dibbed

            k (default: 'kay')
                No help available.

        OPTIONS
            -a
            --alpha
                The alpha option.

            -b bval
            --bravo=bval
                No help available.

            -c [value] (default: 'delta')
            --charlie[=value] (default: 'delta')
                No help available.

        DESCRIPTION
            This is a description of the command.

            There are quite a few nuances.

        EXAMPLES
            Here are some examples of how to use the command.

            Please use your imagination.
    "#]]
    .assert_eq(&manual.render("foo-bar:dib", "FooBar::Dib", "run").unwrap());
}

#[test]
fn manual_without_options_or_arguments() {
    let registry = fixtures::registry();
    expect![[r#"
        NAME
            foo-bar:qux -- Command for qux operations.

        SYNOPSIS
            foo-bar:qux
    "#]]
    .assert_eq(&Manual::new(&registry).render("foo-bar:qux", "FooBar::Qux", "run").unwrap());
}

#[test]
fn manual_variadic() {
    let registry = fixtures::registry();
    expect![[r#"
        NAME
            foo-bar:baz

        SYNOPSIS
            foo-bar:baz [options] [--] i [tail] ...

        ARGUMENTS
            i
                No help available.

            tail
                No help available.

        OPTIONS
            -z
            --zim
                No help available.
    "#]]
    .assert_eq(&Manual::new(&registry).render("foo-bar:baz", "FooBar::Baz", "run").unwrap());
}

#[test]
fn manual_several_option_slots() {
    let shell = Shell::new(Config::new().header("fixture shell 1.0"), fixtures::registry());
    expect![[r#"
        fixture shell 1.0
        NAME
            foo-bar:gir -- Command for Gir.

        SYNOPSIS
            foo-bar:gir [options] [--] doom

        ARGUMENTS
            doom
                No help available.

        OPTIONS
            -z
            --zim
                No help available.

            -a
            --alpha
                The alpha option.

            -b bval
            --bravo=bval
                No help available.

            -c [value] (default: 'delta')
            --charlie[=value] (default: 'delta')
                No help available.
    "#]]
    .assert_eq(&shell.manual("foo-bar:gir").unwrap());

    let err = shell.manual("nonesuch").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ClassNotFound);
}

#[test]
fn roster() {
    let config = Config::new();
    let registry = fixtures::registry();
    let roster = Roster::new(&config, &registry);

    let entries = roster.entries();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries["foo-bar:baz"], "");
    assert_eq!(entries["foo-bar:gir"], "Command for Gir.");

    expect![[r#"
        foo-bar:baz
            No help available.

        foo-bar:dib
            Dibs an i, with optional alpha, bravo, and charlie behaviors.

        foo-bar:gir
            Command for Gir.

        foo-bar:qux
            Command for qux operations.

    "#]]
    .assert_eq(&roster.render());

    let other = Config::new().namespace("elsewhere");
    assert!(Roster::new(&other, &registry).entries().is_empty());
}

#[test]
fn shell_roster() {
    let registry = fixtures::registry;
    let plain = Shell::new(Config::new(), registry()).roster();
    assert_eq!(plain, Roster::new(&Config::new(), &registry()).render());

    let shell = Shell::new(Config::new().header("fixture shell 1.0\n"), registry());
    expect![[r#"
        fixture shell 1.0
        foo-bar:baz
            No help available.

        foo-bar:dib
            Dibs an i, with optional alpha, bravo, and charlie behaviors.

        foo-bar:gir
            Command for Gir.

        foo-bar:qux
            Command for qux operations.

    "#]]
    .assert_eq(&shell.roster());
}
