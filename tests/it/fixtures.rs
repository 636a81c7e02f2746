use shellflags::{Arg, Config, Flag, Help, Registry, Result, Shell, Signature, Target, Type};

const DIB_BODY: &str = r#"
DESCRIPTION
    This is a description of the command.

    There are quite a few nuances.

EXAMPLES
    Here are some examples of how to use the command.

    Please use your imagination.
"#;

pub(crate) fn baz_options() -> Vec<Flag> {
    vec![Flag::new("z,zim")]
}

pub(crate) fn dib_options() -> Vec<Flag> {
    vec![
        Flag::new("a,alpha").help("The alpha option."),
        Flag::new("b,bravo").required().value_name("bval"),
        Flag::new("c,charlie").optional().default("delta"),
    ]
}

fn baz() -> Result<Signature> {
    Ok(Signature::new()
        .options(baz_options())?
        .arg(Arg::new("i").ty(Type::Int))
        .arg(Arg::new("tail").variadic()))
}

fn dib() -> Result<Signature> {
    Ok(Signature::new()
        .options(dib_options())?
        .arg(Arg::new("i").ty(Type::Int).help("The i to be dibbed"))
        .arg(Arg::new("k").ty(Type::Str).default("kay")))
}

fn gir() -> Result<Signature> {
    Ok(Signature::new()
        .options(baz_options())?
        .options(dib_options())?
        .arg(Arg::new("doom").ty(Type::Str)))
}

pub(crate) fn registry() -> Registry {
    Registry::new()
        .register("FooBar::Baz", Target::new().method("run", baz))
        .register(
            "FooBar::Dib",
            Target::new()
                .help(
                    Help::new("Dibs an i, with optional alpha, bravo, and charlie behaviors.")
                        .body(DIB_BODY),
                )
                .method("run", dib),
        )
        .register("FooBar::Gir", Target::new().help(Help::new("Command for Gir.")).method("run", gir))
        .register(
            "FooBar::Qux",
            Target::new()
                .help(Help::new("Command for qux operations."))
                .method("run", || Ok(Signature::new())),
        )
}

pub(crate) fn shell() -> Shell {
    Shell::new(Config::new(), registry())
}
