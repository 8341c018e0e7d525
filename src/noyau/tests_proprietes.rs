//! Tests de propriétés : comportements attendus de la calculatrice, bout en bout.
//!
//! evaluate() + format_result() comme les appelle l’UI.
//! Les valeurs trig en degrés passent par x*π/180 : on compare avec tolérance.

use super::{evaluate, format_number, format_result, ErreurCalc, Mode};

fn eval_ok(expr: &str, mode: Mode) -> f64 {
    evaluate(expr, mode)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
        .unwrap_or_else(|| panic!("expr={expr:?} : pas de résultat"))
}

fn affiche(expr: &str, mode: Mode) -> String {
    let r: Result<f64, ErreurCalc> = match evaluate(expr, mode) {
        Ok(Some(v)) => Ok(v),
        Ok(None) => panic!("expr={expr:?} : pas de résultat"),
        Err(e) => Err(e),
    };
    format_result(&r)
}

fn assert_proche(expr: &str, mode: Mode, attendu: f64) {
    let v = eval_ok(expr, mode);
    assert!(
        (v - attendu).abs() < 1e-9,
        "expr={expr:?} v={v} attendu={attendu}"
    );
}

/* ------------------------ Factorielle ------------------------ */

#[test]
fn prop_factorielle() {
    assert_eq!(affiche("5!", Mode::Degres), "120");
    assert_eq!(eval_ok("3!+1", Mode::Degres), 7.0);
}

#[test]
fn prop_double_factorielle_non_resolue() {
    // reconnue mais pas calculée : jamais 3628800, et l’affichage est "Error"
    match evaluate("5!!", Mode::Degres) {
        Ok(Some(v)) => assert_ne!(v, 3628800.0),
        Ok(None) => panic!("5!! ne doit pas être vide"),
        Err(e) => assert!(matches!(e, ErreurCalc::Syntaxe(_)), "err={e}"),
    }
    assert_eq!(affiche("5!!", Mode::Degres), "Error");
}

#[test]
fn prop_factorielle_invalide() {
    assert_eq!(affiche("2.5!", Mode::Degres), "Error");
    assert_eq!(affiche("π!", Mode::Degres), "Error");
    assert!(matches!(
        evaluate("e!", Mode::Radians),
        Err(ErreurCalc::FactorielleInvalide { .. })
    ));
}

/* ------------------------ Puissance ------------------------ */

#[test]
fn prop_puissance() {
    assert_eq!(eval_ok("2^3", Mode::Degres), 8.0);
    assert_eq!(eval_ok("2^(3+1)", Mode::Degres), 16.0);
    assert_eq!(eval_ok("2^3^2", Mode::Degres), 512.0);
}

/* ------------------------ Trig (DEG) ------------------------ */

#[test]
fn prop_trig_degres() {
    assert_proche("sin(30)", Mode::Degres, 0.5);
    assert_eq!(eval_ok("cos(0)", Mode::Degres), 1.0);
    assert_proche("tan(45)", Mode::Degres, 1.0);
    assert_proche("asin(0.5)", Mode::Degres, 30.0);
    assert_proche("acos(0)", Mode::Degres, 90.0);
    assert_proche("atan(1)", Mode::Degres, 45.0);

    // affichage arrondi à 10 décimales
    assert_eq!(affiche("sin(30)", Mode::Degres), "0.5");
    assert_eq!(affiche("tan(45)", Mode::Degres), "1");
}

#[test]
fn prop_trig_radians() {
    assert_proche("sin(π/2)", Mode::Radians, 1.0);
    assert_proche("cos(π)", Mode::Radians, -1.0);
    assert_proche("asin(1)", Mode::Radians, std::f64::consts::FRAC_PI_2);
}

/* ------------------------ Log / ln / racine ------------------------ */

#[test]
fn prop_log_ln_racine() {
    assert_eq!(eval_ok("log(100)", Mode::Degres), 2.0);
    assert_proche("ln(e)", Mode::Degres, 1.0);
    assert_eq!(eval_ok("√(16)", Mode::Degres), 4.0);
}

#[test]
fn prop_hors_domaine_affiche_error() {
    assert_eq!(affiche("asin(2)", Mode::Degres), "Error");
    assert_eq!(affiche("√(-1)", Mode::Degres), "Error");
    assert_eq!(affiche("1/0", Mode::Degres), "Error");
    assert_eq!(affiche("log(0)", Mode::Degres), "Error");
}

/* ------------------------ Pourcentage ------------------------ */

#[test]
fn prop_pourcentage_sans_contexte() {
    assert_eq!(eval_ok("50%", Mode::Degres), 0.5);
    // PAS 110 : le pourcentage est purement local
    assert_eq!(eval_ok("100+10%", Mode::Degres), 100.1);
    assert_eq!(affiche("100+10%", Mode::Degres), "100.1");
}

/* ------------------------ Parenthèses / constantes ------------------------ */

#[test]
fn prop_parentheses() {
    assert_eq!(eval_ok("(2+3)*4", Mode::Degres), 20.0);
    assert_eq!(affiche("((1+2)", Mode::Degres), "Error");
}

#[test]
fn prop_constantes() {
    assert_eq!(eval_ok("π", Mode::Degres), std::f64::consts::PI);
    assert_eq!(eval_ok("e", Mode::Degres), std::f64::consts::E);
    assert_eq!(affiche("π", Mode::Degres), "3.1415926536");
    assert_eq!(affiche("2*π", Mode::Degres), "6.2831853072");
}

/* ------------------------ Formatage ------------------------ */

#[test]
fn prop_formatage() {
    assert_eq!(format_number(1.23456789012345e11), "1.234568e+11");
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(f64::NAN), "Error");
    assert_eq!(affiche("10^11*1.5", Mode::Degres), "1.500000e+11");
    assert_eq!(affiche("1/10^12", Mode::Degres), "1.000000e-12");
}

/* ------------------------ Déterminisme / vide ------------------------ */

#[test]
fn prop_determinisme_bit_a_bit() {
    for expr in ["sin(30)*cos(60)", "ln(2)/log(2)", "√(2)^2-2", "(1+2)*3/7"] {
        for mode in [Mode::Degres, Mode::Radians] {
            let a = eval_ok(expr, mode);
            let b = eval_ok(expr, mode);
            assert_eq!(a.to_bits(), b.to_bits(), "expr={expr:?}");
        }
    }
}

#[test]
fn prop_vide_pas_de_resultat() {
    assert_eq!(evaluate("", Mode::Degres), Ok(None));
}
