use crate::contact::ACKNOWLEDGEMENT;
use crate::designs::portfolio::SCROLLED_SHADOW;
use crate::view::SCROLL_THRESHOLD;

/// Client-side behaviour: navbar shadow past the scroll threshold, smooth
/// scrolling for section links (a missing target does nothing), and the
/// contact form acknowledgement without navigating.
pub fn client_script() -> String {
    format!(
        "(function(){{\
\nvar nav=document.getElementById('navbar');\
\nvar onScroll=function(){{\
\n    if(nav)nav.style.boxShadow=window.scrollY>{threshold}?'{shadow}':'none';\
\n}};\
\nwindow.addEventListener('scroll',onScroll);\
\ndocument.querySelectorAll('[data-section]').forEach(function(link){{\
\n    link.addEventListener('click',function(e){{\
\n        e.preventDefault();\
\n        var target=document.getElementById(this.dataset.section);\
\n        if(target)target.scrollIntoView({{behavior:'smooth'}});\
\n    }});\
\n}});\
\nvar form=document.getElementById('contact-form');\
\nif(form)form.addEventListener('submit',function(e){{\
\n    e.preventDefault();\
\n    alert('{ack}');\
\n}});\
\n}})();",
        threshold = SCROLL_THRESHOLD,
        shadow = SCROLLED_SHADOW,
        ack = ACKNOWLEDGEMENT,
    )
}
