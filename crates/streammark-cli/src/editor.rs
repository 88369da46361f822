use streammark_engine::MarkdownParser;

/// A document being typed out one character per tick.
#[derive(Debug)]
struct Simulation {
    chars: Vec<char>,
    next: usize,
}

/// State of the live editor: the markdown buffer and its rendered HTML.
///
/// The HTML is re-rendered from the whole buffer after every change, so it
/// never depends on how the buffer got to its current contents.
#[derive(Debug, Default)]
pub struct Editor {
    parser: MarkdownParser,
    input: String,
    html: String,
    simulation: Option<Simulation>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn is_simulating(&self) -> bool {
        self.simulation.is_some()
    }

    pub fn insert(&mut self, c: char) {
        self.input.push(c);
        self.render();
    }

    pub fn backspace(&mut self) {
        if self.input.pop().is_some() {
            self.render();
        }
    }

    /// Empties the buffer and stops any running simulation.
    pub fn clear(&mut self) {
        self.simulation = None;
        self.input.clear();
        self.render();
    }

    /// Stops a running simulation, or clears the buffer and starts streaming
    /// `sample` into it.
    pub fn toggle_simulation(&mut self, sample: &str) {
        if self.simulation.take().is_some() {
            log::debug!("simulation stopped");
            return;
        }
        self.input.clear();
        self.render();
        self.simulation = Some(Simulation {
            chars: sample.chars().collect(),
            next: 0,
        });
        log::debug!("simulation started");
    }

    /// Appends the next simulated character. Returns `false` once the
    /// simulation has finished or when none is running.
    pub fn tick(&mut self) -> bool {
        let Some(sim) = &mut self.simulation else {
            return false;
        };
        match sim.chars.get(sim.next) {
            Some(&c) => {
                sim.next += 1;
                self.insert(c);
                true
            }
            None => {
                self.simulation = None;
                false
            }
        }
    }

    fn render(&mut self) {
        self.html = self.parser.parse(&self.input);
    }
}
