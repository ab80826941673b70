use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use donation_form_lint::{
    fix, generate_reference, validate_all_requirements, validate_structure, SAMPLE_FORM,
};
use std::hint::black_box;

/// Generate form markup with a given share of defective fields
fn generate_validation_content(fields: usize, scenario: &str) -> String {
    let mut content = String::from("<form>\n");

    for i in 0..fields {
        let defective = match scenario {
            "all_valid" => false,
            "mixed_errors" => i % 3 == 0,
            "all_errors" => true,
            _ => unreachable!(),
        };

        if defective {
            content.push_str(&format!(
                "  <label for=\"missing{i}\">Field {i}</label>\n  <input type=\"number\" name=\"f{i}\"></input>\n"
            ));
        } else {
            content.push_str(&format!(
                "  <label for=\"field{i}\">Field {i}</label>\n  <input type=\"email\" id=\"field{i}\" name=\"f{i}\" required>\n"
            ));
        }
    }

    content.push_str("</form>\n");
    content
}

fn bench_validation_error_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation_error_density");

    for scenario in ["all_valid", "mixed_errors", "all_errors"] {
        let markup = generate_validation_content(500, scenario);
        group.bench_with_input(BenchmarkId::from_parameter(scenario), &markup, |b, markup| {
            b.iter(|| black_box(validate_structure(black_box(markup))))
        });
    }

    group.finish();
}

fn bench_donation_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("donation_form");

    group.bench_function("structure_sample", |b| {
        b.iter(|| black_box(validate_structure(black_box(SAMPLE_FORM))))
    });
    group.bench_function("requirements_reference", |b| {
        b.iter(|| black_box(validate_all_requirements(black_box(generate_reference()))))
    });
    group.bench_function("fix_sample", |b| {
        b.iter(|| black_box(fix(black_box(SAMPLE_FORM))))
    });

    group.finish();
}

criterion_group!(
    validation_benches,
    bench_validation_error_density,
    bench_donation_form
);
criterion_main!(validation_benches);
