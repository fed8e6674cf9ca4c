//! Tests scientifiques (campagne) : invariants + comparaison à un oracle + stress contrôlé.
//!
//! But : vérifier priorité / associativité / parenthèses sans écrire chaque cas à la main.
//! - arbres binaires aléatoires (seed fixe), évalués directement (oracle)
//! - même arbre imprimé de deux façons : tout parenthésé, et parenthèses minimales
//! - le noyau doit rendre EXACTEMENT le même f64 (mêmes opérations, même ordre)
//! - budget temps global

use std::time::{Duration, Instant};

use super::{evaluer, ErreurCalcul};

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn eval_ok(expr: &str) -> f64 {
    evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

/* ------------------------ Oracle : arbre binaire ------------------------ */

#[derive(Clone, Copy, Debug)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn symbole(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    fn priorite(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div => 2,
        }
    }
}

#[derive(Debug)]
enum Arbre {
    Num(u32),
    Bin(Op, Box<Arbre>, Box<Arbre>),
}

impl Arbre {
    /// Évaluation directe ; None si une division par zéro survient.
    fn valeur(&self) -> Option<f64> {
        match self {
            Arbre::Num(n) => Some(f64::from(*n)),
            Arbre::Bin(op, a, b) => {
                let a = a.valeur()?;
                let b = b.valeur()?;
                match op {
                    Op::Add => Some(a + b),
                    Op::Sub => Some(a - b),
                    Op::Mul => Some(a * b),
                    Op::Div => {
                        if b == 0.0 {
                            None
                        } else {
                            Some(a / b)
                        }
                    }
                }
            }
        }
    }

    fn priorite(&self) -> u8 {
        match self {
            Arbre::Num(_) => u8::MAX,
            Arbre::Bin(op, _, _) => op.priorite(),
        }
    }

    fn tout_parenthese(&self) -> String {
        match self {
            Arbre::Num(n) => n.to_string(),
            Arbre::Bin(op, a, b) => format!(
                "({} {} {})",
                a.tout_parenthese(),
                op.symbole(),
                b.tout_parenthese()
            ),
        }
    }

    /// Parenthèses minimales pour opérateurs associatifs à gauche :
    /// - gauche : seulement si priorité strictement plus faible
    /// - droite : dès que priorité plus faible OU égale
    fn minimal(&self) -> String {
        match self {
            Arbre::Num(n) => n.to_string(),
            Arbre::Bin(op, a, b) => {
                let g = if a.priorite() < op.priorite() {
                    format!("({})", a.minimal())
                } else {
                    a.minimal()
                };
                let d = if b.priorite() <= op.priorite() {
                    format!("({})", b.minimal())
                } else {
                    b.minimal()
                };
                format!("{g}{}{d}", op.symbole())
            }
        }
    }
}

/* ------------------------ RNG déterministe minimal ------------------------ */

struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn pick(&mut self, n: u32) -> u32 {
        // LCG simple (déterministe)
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.state >> 32) as u32) % n.max(1)
    }
}

fn gen_arbre(rng: &mut Rng, depth: usize) -> Arbre {
    if depth == 0 || rng.pick(4) == 0 {
        // petits entiers, 0 compris (divisions par zéro voulues)
        return Arbre::Num(rng.pick(10));
    }
    let op = match rng.pick(4) {
        0 => Op::Add,
        1 => Op::Sub,
        2 => Op::Mul,
        _ => Op::Div,
    };
    Arbre::Bin(
        op,
        Box::new(gen_arbre(rng, depth - 1)),
        Box::new(gen_arbre(rng, depth - 1)),
    )
}

fn verifier_contre_oracle(arbre: &Arbre, texte: &str) {
    match arbre.valeur() {
        Some(v) => {
            let obtenu = eval_ok(texte);
            assert!(
                obtenu.to_bits() == v.to_bits() || (obtenu.is_nan() && v.is_nan()),
                "expr={texte:?} attendu={v} obtenu={obtenu}"
            );
        }
        None => assert_eq!(
            evaluer(texte),
            Err(ErreurCalcul::DivisionParZero),
            "expr={texte:?}"
        ),
    }
}

/* ------------------------ Propriétés arithmétiques ------------------------ */

#[test]
fn sci_priorite_exemples() {
    assert_eq!(eval_ok("1+2*3"), 7.0);
    assert_eq!(eval_ok("1+6/3"), 3.0);
    assert_eq!(eval_ok("2*3-4/2"), 4.0);
    assert_eq!(eval_ok("2*(3+4)"), 14.0);
}

#[test]
fn sci_associativite_gauche() {
    assert_eq!(eval_ok("8-3-2"), 3.0);
    assert_eq!(eval_ok("8-(3-2)"), 7.0);
    assert_eq!(eval_ok("64/8/2"), 4.0);
    assert_eq!(eval_ok("64/(8/2)"), 16.0);
    assert_eq!(eval_ok("1-2+3"), 2.0);
}

#[test]
fn sci_substitution_sous_expression() {
    // (a) se comporte comme sa valeur
    for (sous, valeur) in [("3+4", "7"), ("10/4", "2.5"), ("2*(1+1)", "4")] {
        let avec = eval_ok(&format!("6*({sous})-1"));
        let sans = eval_ok(&format!("6*{valeur}-1"));
        assert_eq!(avec, sans, "sous={sous:?}");
    }
}

#[test]
fn sci_espaces_insignifiants() {
    for (a, b) in [
        ("1 + 2", "1+2"),
        (" ( 2 * 3 ) / 4 ", "(2*3)/4"),
        ("\t8 -\n3 - 2", "8-3-2"),
    ] {
        assert_eq!(evaluer(a), evaluer(b), "a={a:?} b={b:?}");
    }
}

#[test]
fn sci_oracle_arbres_aleatoires() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0x5EED_u64);
    for _ in 0..300 {
        budget(t0, max);
        let arbre = gen_arbre(&mut rng, 5);
        verifier_contre_oracle(&arbre, &arbre.tout_parenthese());
        verifier_contre_oracle(&arbre, &arbre.minimal());
    }
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_imbrication_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // piles explicites (Vec) : pas de récursion, donc pas de risque de stack overflow
    let n = 10_000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    budget(t0, max);

    assert_eq!(eval_ok(&expr), 1.0);
    budget(t0, max);
}

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let expr = vec!["0.5"; 2_000].join("+");
    budget(t0, max);

    assert_eq!(eval_ok(&expr), 1000.0);
}
