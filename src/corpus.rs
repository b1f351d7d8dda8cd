//! Built-in example documents for the demo front end.
//!
//! English articles of different lengths, kept small enough to summarize in
//! one pass but varied enough to show the presets side by side.

use crate::summarize::LengthPreset;

/// A bundled example document.
pub struct ExampleDocument {
    /// Short display name.
    pub title: &'static str,
    /// Suggested preset when summarizing it.
    pub preset: LengthPreset,
    /// The document text.
    pub text: &'static str,
}

/// All bundled examples, in demo order.
pub const EXAMPLES: &[ExampleDocument] = &[
    ExampleDocument {
        title: "AI Industry",
        preset: LengthPreset::Short,
        text: "Artificial intelligence is transforming the technology industry at an \
unprecedented pace. Major tech companies are investing billions of dollars into AI research \
and development. Machine learning models are now capable of performing tasks that were once \
thought to require human intelligence, such as image recognition, natural language processing, \
and strategic game playing. The breakthrough came with deep learning techniques and the \
availability of massive datasets. Experts predict that AI will continue to revolutionize \
sectors including healthcare, finance, transportation, and education in the coming years.",
    },
    ExampleDocument {
        title: "Climate Change",
        preset: LengthPreset::Medium,
        text: "Climate change represents one of the most pressing challenges facing humanity \
in the 21st century. Scientific evidence overwhelmingly demonstrates that global temperatures \
are rising due to increased concentrations of greenhouse gases in the atmosphere, primarily \
from burning fossil fuels and deforestation. The consequences are already visible: melting \
polar ice caps, rising sea levels, more frequent and severe weather events, and disruptions \
to ecosystems worldwide. Coastal cities face flooding risks, while agricultural regions \
experience droughts and unpredictable growing seasons. International efforts to combat \
climate change have led to agreements like the Paris Climate Accord, where nations committed \
to limiting global temperature increases to well below 2 degrees Celsius above pre-industrial \
levels. However, progress has been inconsistent, with some countries struggling to meet their \
emission reduction targets. Renewable energy technologies, including solar and wind power, \
have become increasingly cost-competitive with fossil fuels, offering hope for a transition \
to cleaner energy sources. Electric vehicles are gaining market share, and governments are \
implementing policies to phase out internal combustion engines. Scientists emphasize that \
immediate and substantial action is required to prevent the most catastrophic effects of \
climate change and preserve the planet for future generations.",
    },
    ExampleDocument {
        title: "Quantum Computing",
        preset: LengthPreset::Long,
        text: "The advent of quantum computing promises to revolutionize the computational \
landscape in ways that were previously confined to the realm of science fiction. Unlike \
classical computers that use bits representing either 0 or 1, quantum computers utilize \
quantum bits, or qubits, which can exist in multiple states simultaneously through a \
phenomenon called superposition. This fundamental difference allows quantum computers to \
process vast amounts of information in parallel, potentially solving certain problems \
exponentially faster than the most powerful classical supercomputers. The development of \
quantum computing has been driven by advances in quantum mechanics, materials science, and \
cryogenic engineering. Major technology companies and research institutions worldwide are \
racing to build practical quantum computers. IBM, Google, Microsoft, and numerous startups \
have made significant progress, with Google claiming to have achieved quantum supremacy in \
2019 when their quantum processor performed a specific calculation that would take classical \
computers thousands of years. Potential applications of quantum computing span numerous \
fields. In cryptography, quantum computers could break many current encryption schemes, \
necessitating the development of quantum-resistant cryptographic methods. In drug discovery, \
they could simulate molecular interactions at unprecedented scales, accelerating the \
development of new medications. Financial institutions are exploring quantum algorithms for \
portfolio optimization and risk analysis. Climate scientists hope to use quantum simulations \
to create more accurate models of atmospheric processes. However, significant challenges \
remain before quantum computers become practical for widespread use. Qubits are extremely \
fragile and susceptible to environmental interference, a problem known as decoherence. \
Maintaining qubits requires cooling systems that operate near absolute zero temperature, \
making quantum computers expensive and difficult to maintain. Error correction in quantum \
systems is far more complex than in classical computing, requiring sophisticated algorithms \
and additional qubits dedicated to error detection and correction. Despite these obstacles, \
researchers remain optimistic about the future of quantum computing. Incremental improvements \
in qubit stability, error correction techniques, and quantum algorithms continue to emerge. \
Some experts predict that within the next decade, quantum computers will begin to solve \
real-world problems that are intractable for classical computers, ushering in a new era of \
computational capability that could transform industries, accelerate scientific discovery, \
and reshape our understanding of computation itself.",
    },
    ExampleDocument {
        title: "Mars Exploration",
        preset: LengthPreset::Medium,
        text: "The exploration of Mars has captivated human imagination for decades, and \
recent technological advances have brought the possibility of human missions to the Red \
Planet closer to reality. NASA's Perseverance rover, which landed on Mars in February 2021, \
has been conducting groundbreaking research, including experiments to produce oxygen from \
the Martian atmosphere and searching for signs of ancient microbial life. Private companies \
like SpaceX are developing spacecraft specifically designed for Mars missions, with ambitious \
timelines for crewed flights. The challenges of sending humans to Mars are immense. The \
journey would take approximately six to nine months each way, exposing astronauts to cosmic \
radiation and the psychological effects of isolation. Mars has only 38% of Earth's gravity, \
which could cause muscle atrophy and bone density loss during extended stays. The thin \
atmosphere, composed mainly of carbon dioxide, provides little protection from radiation and \
makes landing large spacecraft extremely difficult. Establishing a sustainable human presence \
on Mars would require developing life support systems, habitats that protect against \
radiation and extreme temperatures, and methods for producing food, water, and fuel from \
local resources. Some scientists propose using subsurface lava tubes as ready-made shelters, \
while others envision 3D-printed habitats constructed from Martian soil.",
    },
];
