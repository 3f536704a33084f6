use leptos::*;
use leptos_router::A;

#[component]
pub fn TheoryPage() -> impl IntoView {
    view! {
        <main class="container theory-page">
            <header>
                <h1>"Theory"</h1>
                <p class="tagline">"The electrostatics behind the lab"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back to the lab"</A>
            </nav>

            <section class="theory-section">
                <h2>"Coulomb\u{2019}s Law"</h2>
                <p>
                    "Two point charges q\u{2081} and q\u{2082} a distance r apart push on each other with a "
                    "force along the line joining them:"
                </p>
                <p class="formula">"F = k q\u{2081} q\u{2082} / r\u{00b2},   k \u{2248} 8.99 \u{00d7} 10\u{2079} N\u{00b7}m\u{00b2}/C\u{00b2}"</p>
                <p>
                    "Like charges repel (F > 0) and unlike charges attract (F < 0). Doubling the "
                    "distance cuts the force to a quarter. Try it in the "
                    <A href="/widgets">"Coulomb widget"</A> "."
                </p>
            </section>

            <section class="theory-section">
                <h2>"Electric Field"</h2>
                <p>
                    "The field at a point is the force a small positive test charge would feel there, "
                    "per unit charge. Fields of several charges simply add:"
                </p>
                <p class="formula">"E(p) = \u{03a3} k q\u{1d62} (p \u{2212} p\u{1d62}) / |p \u{2212} p\u{1d62}|\u{00b3}"</p>
                <p>
                    "Arrows in the sandbox\u{2019}s field view point away from positive charges and "
                    "toward negative ones. They show direction only; every arrow is drawn the same "
                    "length so the pattern stays readable close to a charge."
                </p>
            </section>

            <section class="theory-section">
                <h2>"Electric Potential"</h2>
                <p>
                    "Potential is the work per unit charge needed to bring a test charge in from "
                    "infinitely far away. For a single point charge it falls off as 1/r, more "
                    "slowly than the force:"
                </p>
                <p class="formula">"V(r) = k q / r"</p>
                <p>
                    "V is a scalar, so the potentials of several charges add without any "
                    "directions to track. At r = 0 the formula blows up; the lab reports \u{221e}."
                </p>
            </section>

            <section class="theory-section">
                <h2>"Coordinate Systems"</h2>
                <p>
                    "Problems with a line of symmetry read better in cylindrical coordinates "
                    "(\u{03c1}, \u{03c6}, z) and problems with a point of symmetry in spherical "
                    "coordinates (r, \u{03b8}, \u{03c6}):"
                </p>
                <p class="formula">"\u{03c1} = \u{221a}(x\u{00b2} + y\u{00b2}),   \u{03c6} = atan2(y, x)"</p>
                <p class="formula">"r = \u{221a}(x\u{00b2} + y\u{00b2} + z\u{00b2}),   \u{03b8} = arccos(z / r)"</p>
            </section>

            <section class="theory-section">
                <p>
                    "Questions or ideas for new experiments? "
                    <A href="/feedback">"Send us feedback"</A> "."
                </p>
            </section>

            <nav class="back-nav bottom">
                <A href="/">"< Back to the lab"</A>
            </nav>
        </main>
    }
}
