//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés :
//!   * une RPN acceptée se construit toujours en arbre (jamais ErreurCalc::Evaluation)
//!   * même entrée + même mode => mêmes bits
//!   * le formatage rend toujours un texte non vide

use std::time::{Duration, Instant};

use super::{evaluate, format_number, ErreurCalc, Mode};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(8) {
        0 => "π".to_string(),
        1 => "e".to_string(),
        2 => format!("{}!", rng.pick(8)),
        3 => format!("{}%", rng.pick(200)),
        4 => format!("{}.{}", rng.pick(10), rng.pick(100)),
        _ => rng.pick(100).to_string(),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    let fonctions = ["sin", "cos", "tan", "asin", "acos", "atan", "log", "ln", "√"];
    match rng.pick(9) {
        0 => gen_atom(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("{}*{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("{}/{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("({})^{}", gen_expr(rng, depth - 1), rng.pick(4)),
        6 => format!("-{}", gen_expr(rng, depth - 1)),
        _ => {
            let f = fonctions[rng.pick(fonctions.len() as u32) as usize];
            format!("{f}({})", gen_expr(rng, depth - 1))
        }
    }
}

/// Texte “bruité” : on coupe / insère des caractères au hasard.
fn bruiter(rng: &mut Rng, s: &str) -> String {
    let alphabet = ['(', ')', '+', '*', '!', '%', '^', '.', 'π', 'e', '√', ' '];
    let mut chars: Vec<char> = s.chars().collect();
    for _ in 0..3 {
        let pos = rng.pick(chars.len() as u32 + 1) as usize;
        if rng.pick(2) == 0 && pos < chars.len() {
            chars.remove(pos);
        } else {
            chars.insert(pos, alphabet[rng.pick(alphabet.len() as u32) as usize]);
        }
    }
    chars.into_iter().collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_valides() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut seen_ok = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        for mode in [Mode::Degres, Mode::Radians] {
            match evaluate(&expr, mode) {
                Ok(Some(v)) => {
                    let again = evaluate(&expr, mode);
                    assert_eq!(again.map(|o| o.map(f64::to_bits)), Ok(Some(v.to_bits())));
                    assert!(!format_number(v).is_empty());
                    seen_ok += 1;
                }
                Ok(None) => panic!("expr={expr:?} : vide inattendu"),
                Err(e) => panic!("expr={expr:?} : erreur inattendue {e}"),
            }
        }
    }

    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_bruit_jamais_evaluation() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let base = gen_expr(&mut rng, 3);
        let expr = bruiter(&mut rng, &base);

        match evaluate(&expr, Mode::Degres) {
            Ok(_) => {}
            Err(ErreurCalc::Evaluation(msg)) => {
                panic!("RPN acceptée mais arbre impossible: expr={expr:?} msg={msg}")
            }
            Err(_) => seen_err += 1,
        }
    }

    // On veut voir des refus, sinon le bruit ne “balaye” rien.
    assert!(seen_err > 0, "aucune erreur vue: bruit trop “sage”");
}

#[test]
fn fuzz_safe_profondeur_parentheses() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 200 niveaux : reste loin de la limite de pile
    let expr = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    budget(t0, max);

    assert_eq!(evaluate(&expr, Mode::Degres), Ok(Some(1.0)));
}

#[test]
fn fuzz_safe_arbre_trop_profond_refuse() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    // 100k moins unaires, puis une chaîne gauche de 100k additions :
    // refus de syntaxe, jamais de débordement de pile
    let negations = format!("{}1", "-".repeat(100_000));
    assert!(matches!(
        evaluate(&negations, Mode::Degres),
        Err(ErreurCalc::Syntaxe(_))
    ));
    budget(t0, max);

    let chaine = format!("1{}", "+1".repeat(100_000));
    assert!(matches!(
        evaluate(&chaine, Mode::Degres),
        Err(ErreurCalc::Syntaxe(_))
    ));
    budget(t0, max);
}
