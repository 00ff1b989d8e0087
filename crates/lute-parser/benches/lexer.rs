use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lute_parser::{Ast, Interner, Lexer, Parser};

fn bench_keywords(c: &mut Criterion) {
    let source = "if elif else each while loop match enum return goto default uninit global internal";

    c.bench_function("lex_keywords", |b| {
        b.iter(|| {
            let mut interner = Interner::new();
            Lexer::new(black_box(source))
                .tokenize(&mut interner)
                .unwrap()
        });
    });
}

fn bench_program(c: &mut Criterion) {
    // A representative program, repeated to give the lexer something to chew on.
    let unit = "{ x : int  x = 1 + 2 * 3  print(\"value\", x) }\n";
    let source: String = unit.repeat(200);

    c.bench_function("lex_program", |b| {
        b.iter(|| {
            let mut interner = Interner::new();
            Lexer::new(black_box(&source))
                .tokenize(&mut interner)
                .unwrap()
        });
    });

    c.bench_function("parse_program", |b| {
        // One outer block wrapping the repeated units.
        let wrapped = format!("{{ {} }}", source);
        b.iter(|| {
            let mut interner = Interner::new();
            let tokens = Lexer::new(black_box(&wrapped))
                .tokenize(&mut interner)
                .unwrap();
            let mut ast = Ast::new();
            Parser::new(tokens).parse(&mut ast).unwrap()
        });
    });
}

criterion_group!(benches, bench_keywords, bench_program);
criterion_main!(benches);
