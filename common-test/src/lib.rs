use std::{
    cell::RefCell,
    collections::HashMap,
    env,
    error::Error,
    rc::Rc,
    sync::{OnceLock, RwLock},
};

use common::subject_observer::{Observer, ObserverResult, Subject};
use rand::{random, rngs::StdRng, Rng, SeedableRng};

pub const DEFAULT_TEST_SEED_ENV: &str = "SENSOR_TEST_SEED";

const MIN_READING: f32 = -40.0;
const MAX_READING: f32 = 60.0;

static SEEDS: OnceLock<RwLock<HashMap<&'static str, u64>>> = OnceLock::new();

fn seeds() -> &'static RwLock<HashMap<&'static str, u64>> {
    SEEDS.get_or_init(|| RwLock::new(HashMap::new()))
}

fn resolve_seed(key: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = seeds().write()?;
    let seed = *seeds.entry(key).or_insert_with(|| {
        let seed = env::var(key)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or_else(random);
        println!("Using seed {} for {}", seed, key);
        seed
    });
    Ok(seed)
}

pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    get_seeded_rng_from_scope(DEFAULT_TEST_SEED_ENV)
}

pub fn get_seeded_rng_from_scope(key: &'static str) -> Result<StdRng, Box<dyn Error>> {
    Ok(StdRng::seed_from_u64(resolve_seed(key)?))
}

pub fn random_readings(rng: &mut impl Rng, count: usize) -> Vec<f32> {
    (0..count)
        .map(|_| rng.gen_range(MIN_READING..MAX_READING))
        .collect()
}

pub type Journal<E> = Rc<RefCell<Vec<(usize, E)>>>;

pub fn new_journal<E>() -> Journal<E> {
    Rc::new(RefCell::new(vec![]))
}

pub struct RecordingObserver<E> {
    id: usize,
    journal: Journal<E>,
}

impl<E> RecordingObserver<E> {
    pub fn new(id: usize, journal: &Journal<E>) -> Rc<Self> {
        Rc::new(RecordingObserver {
            id,
            journal: journal.clone(),
        })
    }

    pub fn id(&self) -> usize {
        self.id
    }
}

impl<S, E> Observer<S, E> for RecordingObserver<E>
where
    S: Subject<E>,
    E: Clone,
{
    fn update(&self, _: &S, event: E) -> ObserverResult {
        self.journal.borrow_mut().push((self.id, event));
        Ok(())
    }
}
