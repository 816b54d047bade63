use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rulepass::pass::charset;
use rulepass::{
    CharClass, ClassRule, GenerateError, GenerationOptions, MAX_ATTEMPTS, Preset, Violation,
    generate,
};

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn has_run(password: &str) -> bool {
    let codes: Vec<i64> = password.chars().map(|c| c as i64).collect();
    codes
        .windows(3)
        .any(|w| (w[1] - w[0] == 1 && w[2] - w[1] == 1) || (w[0] - w[1] == 1 && w[1] - w[2] == 1))
}

fn configurations() -> Vec<GenerationOptions> {
    let mut custom = GenerationOptions::none();
    custom.length = 40;
    custom.lowercase = ClassRule::on(3);
    custom.custom_characters = "\u{e9}\u{df}\u{2603}".into();

    let mut strict = Preset::Secure.options();
    strict.length = 64;

    vec![
        GenerationOptions::default(),
        Preset::Basic.options(),
        Preset::Secure.options(),
        Preset::Pin.options(),
        Preset::Memorable.options(),
        custom,
        strict,
    ]
}

#[test]
fn successful_results_honor_every_rule() {
    for options in configurations() {
        let alphabet = charset::build(&options);
        for seed in 0..25 {
            let generated = match generate(&options, &mut rng(seed)) {
                Ok(generated) => generated,
                Err(e) => panic!("{options:?} with seed {seed}: {e}"),
            };
            let password = generated.password.as_str();

            assert_eq!(password.chars().count(), options.length);
            assert!(password.chars().all(|c| alphabet.contains(&c)));
            for class in options.enabled_classes() {
                assert!(class.count_in(password) >= options.rule(class).minimum);
            }
            if options.no_repeating {
                assert!(!password.chars().zip(password.chars().skip(1)).any(|(a, b)| a == b));
            }
            if options.no_sequential {
                assert!(!has_run(password));
            }
        }
    }
}

#[test]
fn secure_twelve_scenario() {
    let options = GenerationOptions {
        length: 12,
        uppercase: ClassRule::on(2),
        lowercase: ClassRule::on(2),
        digits: ClassRule::on(2),
        symbols: ClassRule::on(2),
        exclude_similar: true,
        no_repeating: true,
        no_sequential: true,
        ..GenerationOptions::default()
    };

    let generated = generate(&options, &mut rng(2024)).unwrap();
    let password = generated.password.as_str();
    assert_eq!(password.chars().count(), 12);
    for class in CharClass::ALL {
        assert!(class.count_in(password) >= 2);
    }
    assert!(!has_run(password));
    assert!(generated.attempts <= MAX_ATTEMPTS);
}

#[test]
fn six_digit_pin_scenario() {
    let options = Preset::Pin.options();
    for seed in 0..10 {
        let generated = generate(&options, &mut rng(seed)).unwrap();
        assert_eq!(generated.password.len(), 6);
        assert!(generated.password.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn oversubscribed_scenario_fails_after_exactly_the_budget() {
    let mut options = GenerationOptions::none();
    options.length = 3;
    options.uppercase = ClassRule::on(2);
    options.lowercase = ClassRule::on(2);

    for seed in 0..5 {
        match generate(&options, &mut rng(seed)) {
            Err(GenerateError::ConstraintsUnsatisfiable {
                attempts,
                best_effort,
                violations,
            }) => {
                assert_eq!(attempts, 100);
                assert_eq!(best_effort.chars().count(), 3);
                assert!(violations.iter().any(|v| matches!(
                    v,
                    Violation::BelowMinimum {
                        class: CharClass::Uppercase | CharClass::Lowercase,
                        ..
                    }
                )));
            }
            other => panic!("expected exhaustion, got {other:?}"),
        }
    }
}

#[test]
fn all_classes_disabled_is_empty_alphabet() {
    let err = generate(&GenerationOptions::none(), &mut rng(0)).unwrap_err();
    assert!(matches!(err, GenerateError::EmptyAlphabet));
    assert!(err.violations().is_empty());
    assert_eq!(err.to_string(), "no character types selected");
}

#[test]
fn similar_exclusion_shrinks_the_digit_alphabet() {
    let mut options = GenerationOptions::none();
    options.length = 10;
    options.digits = ClassRule::on(1);
    options.exclude_similar = true;

    let generated = generate(&options, &mut rng(3)).unwrap();
    assert!(!generated.password.contains('1') && !generated.password.contains('0'));
}

#[test]
fn failure_message_names_the_rules() {
    let mut options = GenerationOptions::none();
    options.length = 2;
    options.use_custom_only = true;
    options.custom_characters = "z".into();
    options.no_repeating = true;

    let err = generate(&options, &mut rng(1)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "could not generate a password meeting all criteria after 100 attempts: contains repeating characters"
    );
}
